//! Wi-Fi network descriptors (`WIFI:S:...;T:...;P:...;;`).
//!
//! The SSID always travels inside the `\"` envelope with `;` escaped. The
//! password is emitted as-is and only when it is not blank. `hidden_ssid` is
//! part of the record but is never written; it is still read back from an
//! `H:` clause when a scanner-generated descriptor carries one.
//!
//! Only the SSID honours `\;` escapes on parse. The password runs up to the
//! `;` that ends the descriptor or opens another known clause, so it may hold
//! backslashes and semicolons but not a `;` directly followed by `S:`, `T:`,
//! `P:` or `H:`.

use crate::binding::bind_fields;
use crate::config::CodecConfig;
use crate::encoding::{escape_delimited, find_unescaped, unescape_delimited};
use crate::errors::{error_codes, PayloadError, PayloadResult};
use crate::payloads::{missing_scheme, strip_scheme, PayloadKind, PayloadType};
use crate::schema::{Accessor, FieldDescriptor, FieldType, Placeholder, ValidationRule};

const SCHEME: &str = "WIFI:";
const CLAUSE_TAGS: [&str; 4] = ["S:", "T:", "P:", "H:"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WifiSecurity {
    #[default]
    Wpa,
    Wep,
    Wpa2Eap,
    NoPass,
}

impl WifiSecurity {
    pub const ALL: [WifiSecurity; 4] = [
        WifiSecurity::Wpa,
        WifiSecurity::Wep,
        WifiSecurity::Wpa2Eap,
        WifiSecurity::NoPass,
    ];
    pub const NAMES: [&'static str; 4] = ["WPA", "WEP", "WPA2EAP", "nopass"];

    /// Wire token written after `T:`.
    pub fn as_str(self) -> &'static str {
        match self {
            WifiSecurity::Wpa => "WPA",
            WifiSecurity::Wep => "WEP",
            WifiSecurity::Wpa2Eap => "WPA2EAP",
            WifiSecurity::NoPass => "nopass",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WifiPayload {
    pub ssid: Option<String>,
    pub hidden_ssid: bool,
    pub password: Option<String>,
    pub security: WifiSecurity,
}

impl WifiPayload {
    pub fn new(ssid: impl Into<String>, password: impl Into<String>, security: WifiSecurity) -> Self {
        Self {
            ssid: Some(ssid.into()),
            hidden_ssid: false,
            password: Some(password.into()),
            security,
        }
    }

    /// Password that will actually be emitted.
    fn emitted_password(&self) -> Option<&str> {
        self.password
            .as_deref()
            .filter(|password| !password.trim().is_empty())
    }
}

static WIFI_FIELDS: [FieldDescriptor<WifiPayload>; 4] = [
    FieldDescriptor {
        name: "ssid",
        field_type: FieldType::String,
        placeholder: Placeholder::CurrentValue,
        description: "The network name (SSID)",
        rules: &[ValidationRule::required("SSID is required.")],
        options: &[],
        accessor: Accessor::Text {
            get: |r| r.ssid.as_deref(),
            set: |r, v| r.ssid = Some(v),
        },
    },
    FieldDescriptor {
        name: "hiddenSsid",
        field_type: FieldType::Boolean,
        placeholder: Placeholder::Fixed("Hidden SSID"),
        description: "Whether the network hides its SSID",
        rules: &[],
        options: &[],
        accessor: Accessor::Boolean {
            get: |r| r.hidden_ssid,
            set: |r, v| r.hidden_ssid = v,
        },
    },
    FieldDescriptor {
        name: "password",
        field_type: FieldType::String,
        placeholder: Placeholder::Fixed("Password"),
        description: "The network password, left out when blank",
        rules: &[],
        options: &[],
        accessor: Accessor::Text {
            get: |r| r.password.as_deref(),
            set: |r, v| r.password = Some(v),
        },
    },
    FieldDescriptor {
        name: "security",
        field_type: FieldType::Dropdown,
        placeholder: Placeholder::Fixed("Security"),
        description: "The network authentication type",
        rules: &[],
        options: &[],
        accessor: Accessor::Choice {
            type_name: "WifiSecurity",
            members: &WifiSecurity::NAMES,
            get: |r| r.security.as_str(),
            set: |r, i| {
                if let Some(security) = WifiSecurity::ALL.get(i) {
                    r.security = *security;
                }
            },
        },
    },
];

/// Split the descriptor body into `KEY:value` clauses. Empty clauses are dropped.
fn split_clauses(body: &str) -> Vec<&str> {
    let mut clauses = Vec::new();
    let mut rest = body;
    while !rest.is_empty() {
        let end = if rest.starts_with("S:") {
            find_unescaped(rest, ';')
        } else if rest.starts_with("P:") {
            password_end(rest)
        } else {
            rest.find(';')
        }
        .unwrap_or(rest.len());

        if end > 0 {
            clauses.push(&rest[..end]);
        }
        rest = rest.get(end + 1..).unwrap_or_default();
    }
    clauses
}

fn password_end(clause: &str) -> Option<usize> {
    clause.match_indices(';').map(|(index, _)| index).find(|&index| {
        let after = &clause[index + 1..];
        after.is_empty() || after == ";" || CLAUSE_TAGS.iter().any(|tag| after.starts_with(tag))
    })
}

impl PayloadKind for WifiPayload {
    const TYPE: PayloadType = PayloadType::Wifi;

    fn fields() -> &'static [FieldDescriptor<Self>] {
        &WIFI_FIELDS
    }

    fn write_payload(&self, _config: &CodecConfig) -> PayloadResult<String> {
        let mut descriptor = String::from(SCHEME);
        descriptor.push_str(&format!(
            "S:{};",
            escape_delimited(self.ssid.as_deref().unwrap_or_default())
        ));
        descriptor.push_str(&format!("T:{};", self.security.as_str()));
        if let Some(password) = self.emitted_password() {
            descriptor.push_str(&format!("P:{};", password));
        }
        descriptor.push(';');
        Ok(descriptor)
    }

    fn read_payload(input: &str, _config: &CodecConfig) -> PayloadResult<Self> {
        let body = strip_scheme(input.trim(), SCHEME)
            .ok_or_else(|| missing_scheme(PayloadType::Wifi, SCHEME))?;

        let mut params: Vec<(&str, String)> = Vec::new();
        for clause in split_clauses(body) {
            let (tag, value) = clause.split_once(':').ok_or_else(|| {
                PayloadError::malformed(
                    error_codes::INVALID_FIELD,
                    format!("Expected KEY:value clause, found '{}'", clause),
                )
            })?;
            match tag {
                "S" => params.push(("ssid", unescape_delimited(value))),
                "T" => params.push(("security", value.to_string())),
                "P" if !value.is_empty() => params.push(("password", value.to_string())),
                "H" => params.push(("hiddenSsid", value.to_string())),
                _ => log::debug!("ignoring Wi-Fi clause '{}'", tag),
            }
        }

        let mut wifi = WifiPayload::default();
        bind_fields(&mut wifi, &WIFI_FIELDS, params)?;
        Ok(wifi)
    }
}
