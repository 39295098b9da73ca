//! WordPiece tokenizer for BERT-style classifiers.
//!
//! Basic pass: lowercase, split on whitespace, isolate punctuation.
//! WordPiece pass: greedy longest-match-first with `##` continuations;
//! a word with no full segmentation becomes `[UNK]`.

use std::collections::HashMap;
use std::path::Path;

use topics_core::errors::InferenceError;

const CLS: &str = "[CLS]";
const SEP: &str = "[SEP]";
const UNK: &str = "[UNK]";
const CONTINUATION: &str = "##";
const MAX_WORD_CHARS: usize = 100;

/// Vocabulary-backed WordPiece tokenizer producing `i64` input ids.
#[derive(Debug, Clone)]
pub struct WordPieceTokenizer {
    vocab: HashMap<String, i64>,
    cls_id: i64,
    sep_id: i64,
    unk_id: i64,
    max_len: usize,
}

impl WordPieceTokenizer {
    /// Build from vocabulary lines; a token's id is its line index.
    ///
    /// # Errors
    /// `InferenceError::TokenizerLoadFailed` if `[CLS]`, `[SEP]`, or `[UNK]`
    /// is missing, or `max_len` cannot hold the framing tokens.
    pub fn from_vocab_lines<I, S>(lines: I, max_len: usize) -> Result<Self, InferenceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = HashMap::new();
        for (id, line) in lines.into_iter().enumerate() {
            let token = line.as_ref().trim_end();
            vocab.entry(token.to_string()).or_insert(id as i64);
        }

        let special = |token: &str| {
            vocab
                .get(token)
                .copied()
                .ok_or_else(|| InferenceError::TokenizerLoadFailed {
                    path: "<vocab>".to_string(),
                    reason: format!("vocabulary has no {token} token"),
                })
        };
        let cls_id = special(CLS)?;
        let sep_id = special(SEP)?;
        let unk_id = special(UNK)?;

        if max_len < 2 {
            return Err(InferenceError::TokenizerLoadFailed {
                path: "<vocab>".to_string(),
                reason: format!("max sequence length {max_len} is below 2"),
            });
        }

        Ok(Self {
            vocab,
            cls_id,
            sep_id,
            unk_id,
            max_len,
        })
    }

    /// Read a vocabulary file, one token per line.
    pub fn load(path: &Path, max_len: usize) -> Result<Self, InferenceError> {
        let text = std::fs::read_to_string(path).map_err(|e| InferenceError::TokenizerLoadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_vocab_lines(text.lines(), max_len).map_err(|e| match e {
            InferenceError::TokenizerLoadFailed { reason, .. } => {
                InferenceError::TokenizerLoadFailed {
                    path: path.display().to_string(),
                    reason,
                }
            }
            other => other,
        })
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Encode `text` as `[CLS] tokens… [SEP]`, truncated to `max_len`.
    pub fn encode(&self, text: &str) -> Vec<i64> {
        let budget = self.max_len - 2;
        let mut ids = Vec::with_capacity(self.max_len.min(text.len() + 2));
        ids.push(self.cls_id);
        for word in basic_tokenize(text) {
            if ids.len() > budget {
                break;
            }
            self.wordpiece(&word, &mut ids);
        }
        ids.truncate(budget + 1);
        ids.push(self.sep_id);
        ids
    }

    fn wordpiece(&self, word: &str, out: &mut Vec<i64>) {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() > MAX_WORD_CHARS {
            out.push(self.unk_id);
            return;
        }

        let mut pieces = Vec::new();
        let mut start = 0;
        while start < chars.len() {
            let mut end = chars.len();
            let mut found = None;
            while start < end {
                let mut piece: String = chars[start..end].iter().collect();
                if start > 0 {
                    piece.insert_str(0, CONTINUATION);
                }
                if let Some(&id) = self.vocab.get(&piece) {
                    found = Some(id);
                    break;
                }
                end -= 1;
            }
            match found {
                Some(id) => {
                    pieces.push(id);
                    start = end;
                }
                None => {
                    out.push(self.unk_id);
                    return;
                }
            }
        }
        out.extend(pieces);
    }
}

/// Lowercase, split on whitespace, and split punctuation into single tokens.
fn basic_tokenize(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    for chunk in text.to_lowercase().split_whitespace() {
        let mut current = String::new();
        for c in chunk.chars() {
            if is_punctuation(c) {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
                words.push(c.to_string());
            } else {
                current.push(c);
            }
        }
        if !current.is_empty() {
            words.push(current);
        }
    }
    words
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || (!c.is_ascii() && !c.is_alphanumeric() && !c.is_whitespace())
}
