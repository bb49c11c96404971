//! Built-in word table for auto mode.
//!
//! Every entry pairs two everyday words from the same category, close
//! enough that the impostor can bluff but different enough to be caught.

use super::entities::{
    Category::{self, Actions, Animals, Food, Objects, Places},
    Difficulty::{self, Easy, Hard, Medium},
    WordPairEntry,
};

const fn entry(
    category: Category,
    difficulty: Difficulty,
    word1: &'static str,
    word2: &'static str,
) -> WordPairEntry {
    WordPairEntry {
        category,
        difficulty,
        word1,
        word2,
    }
}

pub const WORD_PAIRS: &[WordPairEntry] = &[
    // Objects
    entry(Objects, Easy, "cup", "glass"),
    entry(Objects, Medium, "table", "chair"),
    entry(Objects, Medium, "bag", "shoe"),
    entry(Objects, Medium, "phone", "watch"),
    entry(Objects, Medium, "book", "pen"),
    entry(Objects, Medium, "lamp", "key"),
    entry(Objects, Hard, "glasses", "watch"),
    // Food
    entry(Food, Easy, "milk", "coffee"),
    entry(Food, Medium, "rice", "bread"),
    entry(Food, Medium, "burger", "pizza"),
    entry(Food, Medium, "apple", "banana"),
    entry(Food, Medium, "cake", "egg"),
    entry(Food, Medium, "tea", "coffee"),
    entry(Food, Hard, "fish", "egg"),
    // Places
    entry(Places, Easy, "home", "school"),
    entry(Places, Medium, "beach", "park"),
    entry(Places, Medium, "shop", "store"),
    entry(Places, Medium, "kitchen", "bedroom"),
    entry(Places, Medium, "garden", "street"),
    entry(Places, Medium, "library", "cafe"),
    // Animals
    entry(Animals, Easy, "cat", "dog"),
    entry(Animals, Medium, "bird", "fish"),
    entry(Animals, Medium, "horse", "cow"),
    entry(Animals, Medium, "pig", "sheep"),
    entry(Animals, Medium, "chicken", "duck"),
    entry(Animals, Medium, "rabbit", "mouse"),
    // Actions
    entry(Actions, Easy, "eat", "sleep"),
    entry(Actions, Medium, "walk", "run"),
    entry(Actions, Medium, "jump", "dance"),
    entry(Actions, Medium, "sit", "stand"),
    entry(Actions, Medium, "talk", "play"),
    entry(Actions, Hard, "read", "write"),
];

/// Entries of the given difficulty, or the whole table if none match.
#[must_use]
pub fn entries_for(table: &[WordPairEntry], difficulty: Difficulty) -> Vec<&WordPairEntry> {
    let matching: Vec<_> = table
        .iter()
        .filter(|entry| entry.difficulty == difficulty)
        .collect();
    if matching.is_empty() {
        table.iter().collect()
    } else {
        matching
    }
}
