use serde::{Deserialize, Serialize};

/// Optional postal address captured at registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub cep: Option<String>,
    pub street: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
}

impl Address {
    /// Filled-in parts joined with ", ".
    pub fn summary(&self) -> String {
        [&self.street, &self.neighborhood, &self.city, &self.cep]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn is_empty(&self) -> bool {
        self.cep.is_none() && self.street.is_none() && self.neighborhood.is_none() && self.city.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub company: String,
    #[serde(default)]
    pub address: Address,
}

/// Registration payload; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub company: String,
    pub address: Address,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_summary_skips_missing_parts() {
        let addr = Address {
            cep: Some("01310-100".into()),
            street: None,
            neighborhood: Some("Bela Vista".into()),
            city: Some("São Paulo".into()),
        };
        assert_eq!(addr.summary(), "Bela Vista, São Paulo, 01310-100");
        assert!(!addr.is_empty());
        assert!(Address::default().is_empty());
    }

    #[test]
    fn password_is_not_serialized() {
        let user = User {
            id: "1".into(),
            name: "João Silva".into(),
            email: "joao.silva@empresa.com".into(),
            password: "senha123".into(),
            company: "Tech Solutions".into(),
            address: Address::default(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("senha123"));
    }
}
