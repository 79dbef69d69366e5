//! Local storage for pun rankings.
//!
//! The evaluation TUI lets an evaluator order a headline's puns twice: by
//! funniness and by how closely each relates to the headline. Saving stores
//! one JSON line per pun in `<results_dir>/<evaluator>.jsonl`, replacing any
//! earlier ranking of the same headline; nothing is sent to the backend.

mod jsonl;
mod model;

pub use jsonl::{read_records, results_file, save_records, write_jsonl};
pub use model::{EvaluationRecord, RankedPun, records_for_ranking};
