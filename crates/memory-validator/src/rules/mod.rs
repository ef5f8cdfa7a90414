pub mod duplicates;
pub mod name;
pub mod variables;

use crate::messages::Vocab;
use crate::report::{FieldPath, Issue, IssueCode};

pub(crate) fn issue(path: FieldPath, code: IssueCode, vocab: &Vocab) -> Issue {
    Issue {
        path,
        code,
        message: vocab.message(code).to_string(),
    }
}
