#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::{Deserialize, Serialize};
use tabled::Tabled;
use typed_builder::TypedBuilder;

/// A single course grade, as entered by the user and as persisted on disk.
///
/// Field order doubles as the key order of the persisted JSON object. Older
/// grade files carried only `percent` and `credits`, so `name` and `cost`
/// decode with explicit defaults when absent.
#[derive(Tabled, Serialize, Deserialize, TypedBuilder, Clone, Debug, PartialEq)]
#[builder(doc)]
pub struct GradeRecord {
    /// * `name`: course name, empty when the user skipped it
    #[tabled(rename = "Name")]
    #[serde(default)]
    #[builder(setter(into), default)]
    pub name:    String,
    /// * `cost`: amount paid for the course
    #[tabled(rename = "Cost")]
    #[tabled(display("display_cost"))]
    #[serde(default)]
    #[builder(default)]
    pub cost:    f64,
    /// * `percent`: grade received, as a percentage; deliberately not clamped
    #[tabled(rename = "Grade")]
    #[tabled(display("display_percent"))]
    pub percent: f64,
    /// * `credits`: credit hours the course is worth
    #[tabled(rename = "Credits")]
    #[builder(default = 1)]
    pub credits: u32,
}

impl Default for GradeRecord {
    fn default() -> Self {
        Self::builder().percent(100.0).build()
    }
}

/// Renders a grade cell with two decimal places.
fn display_percent(percent: &f64) -> String {
    format!("{percent:.2}")
}

/// Renders a cost cell in the parenthesised form the summary lines use.
fn display_cost(cost: &f64) -> String {
    format!("({cost:.2})")
}
