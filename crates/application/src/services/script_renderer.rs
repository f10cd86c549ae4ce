use fortimac_domain::{AddressGroup, MacAddress};

/// Renders the `config firewall address` fragment for an address group.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptRenderer;

impl ScriptRenderer {
    pub fn new() -> Self {
        Self
    }

    /// `"AA:BB:CC:DD:EE:FF" "11:22:33:44:55:66"`, in the given order.
    pub fn quote_macs(macs: &[MacAddress]) -> String {
        macs.iter()
            .map(|mac| format!("\"{}\"", mac))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `fortigate_name` is inserted verbatim; embedded quotes are not escaped.
    pub fn render(&self, group: AddressGroup, fortigate_name: &str, macs: &[MacAddress]) -> String {
        let quoted = Self::quote_macs(macs);
        let label = group.label();

        [
            "config firewall address".to_string(),
            format!("edit \"{label}\""),
            "    config dynamic_mapping".to_string(),
            format!("        edit \"{fortigate_name}\"-\"root\""),
            "        set associated-interface \"any\"".to_string(),
            "        unset color".to_string(),
            format!("    set macaddr {quoted}"),
            "next".to_string(),
            "end".to_string(),
        ]
        .join("\n")
    }
}
