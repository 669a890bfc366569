//! Joining questions to their answers.

use std::collections::HashMap;

use crate::posting::Posting;

/// Pair each question with all of its answers.
///
/// Answers are grouped by `parent_id` and inner-joined against questions on
/// `id`, so unanswered questions are dropped. Output follows the order in
/// which questions appear in `postings`.
pub fn grouped_postings(postings: &[Posting]) -> Vec<(Posting, Vec<Posting>)> {
    let mut answers: HashMap<i32, Vec<Posting>> = HashMap::new();
    for answer in postings.iter().filter(|p| p.is_answer()) {
        if let Some(parent) = answer.parent_id {
            answers.entry(parent).or_default().push(answer.clone());
        }
    }

    postings
        .iter()
        .filter(|p| p.is_question())
        .filter_map(|q| answers.get(&q.id).map(|a| (q.clone(), a.clone())))
        .collect()
}

/// Reduce every question's answers to the highest answer score.
pub fn scored_postings(grouped: Vec<(Posting, Vec<Posting>)>) -> Vec<(Posting, i32)> {
    grouped
        .into_iter()
        .map(|(question, answers)| {
            let high_score = answers.iter().map(|a| a.score).max().unwrap_or(0);
            (question, high_score)
        })
        .collect()
}
