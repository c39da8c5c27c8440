use serde::Deserialize;

/// Response of `my-user-account`, used to prefill the requestor name
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub family_name: String,
}
