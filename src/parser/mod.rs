pub mod blocks;
pub mod labels;

use serde::Serialize;

pub use blocks::segment;

/// One contact. Fields nothing in the block matched stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    #[serde(rename = "Full Name")]
    pub full_name: String,
    #[serde(rename = "Job Title")]
    pub job_title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Email")]
    pub email: String,
}

impl Record {
    pub const HEADERS: [&'static str; 4] = ["Full Name", "Job Title", "Company", "Email"];
}

