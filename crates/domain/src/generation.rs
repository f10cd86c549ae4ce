use crate::address_group::AddressGroup;
use crate::mac_address::MacAddress;

/// Input of a single script generation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationRequest {
    pub mac_address_list: String,
    pub fortigate_name: String,
    pub group_choice: i64,
}

impl GenerationRequest {
    pub fn new(
        mac_address_list: impl Into<String>,
        fortigate_name: impl Into<String>,
        group_choice: i64,
    ) -> Self {
        Self {
            mac_address_list: mac_address_list.into(),
            fortigate_name: fortigate_name.into(),
            group_choice,
        }
    }

    pub fn group(&self) -> AddressGroup {
        AddressGroup::from_choice(self.group_choice)
    }
}

/// Output of a successful generation. `count` always equals `extracted_macs.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub script: String,
    pub count: usize,
    pub extracted_macs: Vec<MacAddress>,
}

impl GenerationResult {
    pub fn new(script: String, extracted_macs: Vec<MacAddress>) -> Self {
        Self {
            script,
            count: extracted_macs.len(),
            extracted_macs,
        }
    }
}
