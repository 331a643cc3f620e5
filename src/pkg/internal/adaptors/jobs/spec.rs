use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

// (value, label) pairs; the value travels on the wire, the label is what
// the dropdowns show
pub const TECH_OPTIONS: &[(&str, &str)] = &[
    ("java-spring", "Java Spring"),
    ("python-django", "Python Django"),
    ("python-flask", "Python Flask"),
    ("nodejs-express", "NodeJs Express"),
    ("nodejs-nest", "NodeJs Nest"),
    ("dotnet-core", ".Net Core"),
    ("angular", "Angular"),
    ("reactjs", "Reactjs"),
    ("react-native", "React Native"),
    ("flutter", "Flutter"),
];

// scraped records may miss any field, display fallbacks happen at render time
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub work_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub benefit: Vec<String>,
    #[serde(default)]
    pub listing_date: Option<String>,
    #[serde(default)]
    pub tag: String,
}

// dialog state held between renders, and the shape the dialog forms post back
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct JobForm {
    pub id: String,
    pub title: String,
    pub company_name: String,
    pub work_type: String,
    pub location: String,
    pub salary: String,
    pub benefit: String,
    pub listing_date: String,
    pub tag: String,
}

impl JobForm {
    pub fn from_listing(job: &JobListing) -> Self {
        JobForm {
            id: job.id.clone(),
            title: job.title.clone(),
            company_name: job.company_name.clone().unwrap_or_default(),
            work_type: job.work_type.clone().unwrap_or_default(),
            location: job.location.clone().unwrap_or_default(),
            salary: job.salary.clone().unwrap_or_default(),
            benefit: join_benefits(&job.benefit),
            listing_date: date_input_value(job.listing_date.as_deref().unwrap_or_default()),
            tag: job.tag.clone(),
        }
    }

    pub fn into_listing(self) -> JobListing {
        JobListing {
            id: self.id,
            title: self.title,
            company_name: Some(self.company_name),
            work_type: Some(self.work_type),
            location: Some(self.location),
            salary: Some(self.salary),
            benefit: split_benefits(&self.benefit),
            listing_date: Some(self.listing_date),
            tag: self.tag,
        }
    }
}

pub fn join_benefits(benefit: &[String]) -> String {
    benefit.join(", ")
}

// splitting an empty string yields one empty entry, the wire shape for a
// blank field
pub fn split_benefits(benefit: &str) -> Vec<String> {
    benefit
        .split(", ")
        .map(|item| item.trim().to_string())
        .collect()
}

// RFC 3339 timestamps or plain dates; anything else shows verbatim
pub fn display_date(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%-m/%-d/%Y").to_string();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed.format("%-m/%-d/%Y").to_string();
    }
    raw.to_string()
}

// normalized to the YYYY-MM-DD value a date input expects
pub fn date_input_value(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%Y-%m-%d").to_string();
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}
