use fortimac_domain::{GenerationRequest, GenerationResult};
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Request DTO posted by the web form.
///
/// Keys are matched case-insensitively (`MacAddressList`, `macAddressList`, ...).
/// Missing or `null` fields fall back to an empty string / `0`; unknown keys are ignored
/// and a key given twice keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertMacRequest {
    pub mac_address_list: String,
    pub fortigate_name: String,
    pub group_choice: i64,
}

impl ConvertMacRequest {
    pub fn into_domain(self) -> GenerationRequest {
        GenerationRequest::new(self.mac_address_list, self.fortigate_name, self.group_choice)
    }
}

impl<'de> Deserialize<'de> for ConvertMacRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ConvertMacRequestVisitor)
    }
}

struct ConvertMacRequestVisitor;

impl<'de> Visitor<'de> for ConvertMacRequestVisitor {
    type Value = ConvertMacRequest;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object with MacAddressList, FortigateName and GroupChoice")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut req = ConvertMacRequest::default();

        // Repeated keys (in any casing) overwrite earlier values.
        while let Some(key) = map.next_key::<String>()? {
            match key.to_ascii_lowercase().as_str() {
                "macaddresslist" => {
                    req.mac_address_list = map.next_value::<Option<String>>()?.unwrap_or_default()
                }
                "fortigatename" => {
                    req.fortigate_name = map.next_value::<Option<String>>()?.unwrap_or_default()
                }
                "groupchoice" => {
                    req.group_choice = map.next_value::<Option<i64>>()?.unwrap_or_default()
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(req)
    }
}

/// Response DTO for a generated script
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ConvertMacResponse {
    pub script: String,
    pub count: usize,
    pub extracted_macs: Vec<String>,
}

impl ConvertMacResponse {
    pub fn from_result(result: GenerationResult) -> Self {
        Self {
            script: result.script,
            count: result.count,
            extracted_macs: result
                .extracted_macs
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}
