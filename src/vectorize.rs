//! Mapping scored questions into clustering space.

use crate::posting::Posting;

/// A point `(language_index * spread, score)`.
///
/// `x` is always a multiple of the spread it was built with, so the language
/// can be recovered with [`Vector::language_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Index into the language list this point was placed for.
    ///
    /// `None` when `spread` is zero or `x` lies left of the first language.
    pub fn language_index(&self, spread: i32) -> Option<usize> {
        self.x
            .checked_div(spread)
            .and_then(|idx| usize::try_from(idx).ok())
    }
}

/// Index of the first language whose name equals `tags` exactly.
pub fn language_index(tags: Option<&str>, languages: &[String]) -> Option<usize> {
    let tag = tags?;
    languages.iter().position(|lang| lang == tag)
}

/// Turn `(question, high_score)` pairs into vectors.
///
/// Pairs whose question tag matches no tracked language are discarded, as are
/// pairs whose `x` would not fit in an `i32`.
pub fn vector_postings(scored: &[(Posting, i32)], languages: &[String], spread: i32) -> Vec<Vector> {
    scored
        .iter()
        .filter_map(|(question, high_score)| {
            let idx = language_index(question.tags.as_deref(), languages)?;
            let x = i32::try_from(idx).ok()?.checked_mul(spread)?;
            Some(Vector::new(x, *high_score))
        })
        .collect()
}
