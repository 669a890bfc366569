//! Posting records and the line parser.
//!
//! Input is headerless comma-separated text, one posting per line:
//!
//! ```text
//! postingType,id,acceptedAnswerId,parentId,score[,tags]
//! ```
//!
//! `postingType` is `1` for a question and `2` for an answer. The two optional
//! integer fields are empty when absent. `tags` holds a single language name.

use std::io::BufRead;
use std::str::FromStr;

use crate::error::{Error, RecordError, Result};

/// Whether a posting asks or answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostingType {
    /// A question (wire value `1`).
    Question,
    /// An answer (wire value `2`).
    Answer,
}

impl TryFrom<i32> for PostingType {
    type Error = RecordError;

    fn try_from(value: i32) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Question),
            2 => Ok(Self::Answer),
            other => Err(RecordError::UnknownPostingType(other)),
        }
    }
}

/// A question or answer from the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    /// Question or answer.
    pub posting_type: PostingType,
    /// Posting id, unique per dataset.
    pub id: i32,
    /// Id of the accepted answer, questions only.
    pub accepted_answer_id: Option<i32>,
    /// Id of the answered question. Always set for answers.
    pub parent_id: Option<i32>,
    /// Net vote score.
    pub score: i32,
    /// Language tag, if any.
    pub tags: Option<String>,
}

impl Posting {
    /// Whether this posting is a question.
    pub fn is_question(&self) -> bool {
        self.posting_type == PostingType::Question
    }

    /// Whether this posting is an answer.
    pub fn is_answer(&self) -> bool {
        self.posting_type == PostingType::Answer
    }
}

fn required_int(field: &'static str, value: &str) -> std::result::Result<i32, RecordError> {
    value.parse().map_err(|_| RecordError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

fn optional_int(
    field: &'static str,
    value: &str,
) -> std::result::Result<Option<i32>, RecordError> {
    if value.is_empty() {
        Ok(None)
    } else {
        required_int(field, value).map(Some)
    }
}

impl FromStr for Posting {
    type Err = RecordError;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 5 {
            return Err(RecordError::TooFewFields {
                found: fields.len(),
            });
        }

        let posting_type = PostingType::try_from(required_int("postingType", fields[0])?)?;
        let id = required_int("id", fields[1])?;
        let accepted_answer_id = optional_int("acceptedAnswerId", fields[2])?;
        let parent_id = optional_int("parentId", fields[3])?;
        let score = required_int("score", fields[4])?;
        let tags = fields
            .get(5)
            .filter(|t| !t.is_empty())
            .map(|t| (*t).to_string());

        if posting_type == PostingType::Answer && parent_id.is_none() {
            return Err(RecordError::MissingParent { id });
        }

        Ok(Self {
            posting_type,
            id,
            accepted_answer_id,
            parent_id,
            score,
            tags,
        })
    }
}

/// Parse every line of `reader` into a posting.
///
/// Blank lines are skipped. The first malformed line aborts the read and is
/// reported with its 1-based line number.
pub fn read_postings<R: BufRead>(reader: R) -> Result<Vec<Posting>> {
    let mut postings = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let posting = line.parse::<Posting>().map_err(|source| Error::MalformedRecord {
            line: idx + 1,
            source,
        })?;
        postings.push(posting);
    }
    Ok(postings)
}
