use serde::{Deserialize, Serialize};
use std::fmt;

/// Firewall address objects a generated script can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AddressGroup {
    #[default]
    Staff,
    Student,
    IntuneDevices,
    SecurlyFiltered,
}

impl AddressGroup {
    pub const ALL: [AddressGroup; 4] = [
        AddressGroup::Staff,
        AddressGroup::Student,
        AddressGroup::IntuneDevices,
        AddressGroup::SecurlyFiltered,
    ];

    /// Maps the form selector to a group. Unknown selectors (including 0) fall back to `Staff`.
    pub fn from_choice(choice: i64) -> Self {
        match choice {
            2 => AddressGroup::Student,
            3 => AddressGroup::IntuneDevices,
            4 => AddressGroup::SecurlyFiltered,
            _ => AddressGroup::Staff,
        }
    }

    pub fn choice(self) -> i64 {
        match self {
            AddressGroup::Staff => 1,
            AddressGroup::Student => 2,
            AddressGroup::IntuneDevices => 3,
            AddressGroup::SecurlyFiltered => 4,
        }
    }

    /// Object name as configured on the appliance. Must match byte for byte,
    /// "Microsft" included.
    pub fn label(self) -> &'static str {
        match self {
            AddressGroup::Staff => "Staff - Device - MAC Addresses",
            AddressGroup::Student => "Student - Device - MAC Addresses",
            AddressGroup::IntuneDevices => "Microsft Intune Devices",
            AddressGroup::SecurlyFiltered => "Securly Filtered - Device MAC Addresses",
        }
    }
}

impl fmt::Display for AddressGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
