use super::payout_method::PayoutMethodType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Collective,
    Fund,
    Project,
    Event,
    Individual,
    Organization,
    User,
    Vendor,
}

impl AccountType {
    /// Account types that operate under a separate fiscal host.
    pub const WITH_HOST: [AccountType; 4] = [
        AccountType::Collective,
        AccountType::Fund,
        AccountType::Project,
        AccountType::Event,
    ];

    pub fn has_host_family(self) -> bool {
        Self::WITH_HOST.contains(&self)
    }
}

/// The fiscal host of the collective paying an expense.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub id: String,
    #[serde(default)]
    pub supported_payout_methods: Vec<PayoutMethodType>,
    /// Whether the host may pay expenses across hosts.
    #[serde(default)]
    pub is_trusted_host: bool,
}

/// Reference to the host of a payee; only the id matters here.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct HostRef {
    pub id: String,
}

/// The collective paying an expense.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct Payer {
    #[serde(default)]
    pub host: Option<Host>,
}

impl Payer {
    pub fn supported_payout_methods(&self) -> &[PayoutMethodType] {
        self.host
            .as_ref()
            .map(|host| host.supported_payout_methods.as_slice())
            .unwrap_or_default()
    }

    pub fn is_trusted_host(&self) -> bool {
        self.host.as_ref().is_some_and(|host| host.is_trusted_host)
    }

    fn host_id(&self) -> Option<&str> {
        self.host.as_ref().map(|host| host.id.as_str())
    }
}

/// The account being paid by an expense.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Payee {
    pub id: String,
    pub r#type: AccountType,
    #[serde(default)]
    pub host: Option<HostRef>,
}

impl Payee {
    fn host_id(&self) -> Option<&str> {
        self.host.as_ref().map(|host| host.id.as_str())
    }
}

/// How payer and payee relate through their hosts. Always derived.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "camelCase")]
pub struct HostRelationship {
    pub same_host: bool,
    pub payee_has_host_family: bool,
    pub self_hosted: bool,
}

impl HostRelationship {
    /// Without a payee every flag is false.
    pub fn between(payer: &Payer, payee: Option<&Payee>) -> Self {
        let Some(payee) = payee else {
            return Self::default();
        };

        let same_host = match (payee.host_id(), payer.host_id()) {
            (Some(payee_host), Some(payer_host)) => payee_host == payer_host,
            _ => false,
        };

        Self {
            same_host,
            payee_has_host_family: payee.r#type.has_host_family(),
            self_hosted: payee.host_id() == Some(payee.id.as_str()),
        }
    }

    /// Hosted accounts only accept payout methods chosen by their host.
    pub fn restricts_payee_methods(&self) -> bool {
        self.payee_has_host_family && !self.self_hosted
    }

    /// Payer and a hosted payee sit under different hosts.
    pub fn is_cross_host(&self) -> bool {
        self.payee_has_host_family && !self.same_host
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payer(host_id: &str) -> Payer {
        Payer {
            host: Some(Host {
                id: host_id.to_string(),
                ..Default::default()
            }),
        }
    }

    fn payee(id: &str, r#type: AccountType, host_id: Option<&str>) -> Payee {
        Payee {
            id: id.to_string(),
            r#type,
            host: host_id.map(|id| HostRef { id: id.to_string() }),
        }
    }

    #[test]
    fn test_host_family() {
        assert!(AccountType::Project.has_host_family());
        assert!(AccountType::Event.has_host_family());
        assert!(!AccountType::Organization.has_host_family());
        assert!(!AccountType::Individual.has_host_family());
    }

    #[test]
    fn test_same_host() {
        let rel = HostRelationship::between(
            &payer("host-1"),
            Some(&payee("p", AccountType::Project, Some("host-1"))),
        );
        assert!(rel.same_host);
        assert!(!rel.is_cross_host());
    }

    #[test]
    fn test_missing_hosts_are_never_the_same() {
        let rel = HostRelationship::between(
            &Payer::default(),
            Some(&payee("p", AccountType::Individual, None)),
        );
        assert!(!rel.same_host);
    }

    #[test]
    fn test_self_hosted() {
        let rel = HostRelationship::between(
            &payer("host-1"),
            Some(&payee("c", AccountType::Collective, Some("c"))),
        );
        assert!(rel.self_hosted);
        assert!(!rel.restricts_payee_methods());
        assert!(rel.is_cross_host());
    }

    #[test]
    fn test_no_payee() {
        assert_eq!(
            HostRelationship::between(&payer("host-1"), None),
            HostRelationship::default()
        );
    }

    #[test]
    fn test_payee_deserialization() {
        let json = r#"{"id": "p1", "type": "PROJECT", "host": {"id": "h2"}}"#;
        let payee: Payee = serde_json::from_str(json).unwrap();
        assert_eq!(payee.r#type, AccountType::Project);
        assert_eq!(payee.host, Some(HostRef { id: "h2".to_string() }));
    }
}
