use serde::{Deserialize, Serialize};

/// Wizard-collected lead details, forwarded verbatim to the webhook.
/// All fields are free text; validation belongs to the form layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub company_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub revenue: String,
    pub date: String,
    pub time: String,
}
