use serde::{Deserialize, Serialize};

/// Usuario tal como lo devuelve `GET /api/user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub role: String,
    #[serde(rename = "qrCode", default)]
    pub qr_code: Option<String>,
    #[serde(default)]
    pub becado: Option<bool>,
    #[serde(rename = "estudianteID", default)]
    pub estudiante_id: Option<String>,
}

impl BackendUser {
    pub fn is_becado(&self) -> bool {
        self.becado.unwrap_or(false)
    }

    /// Etiqueta que se muestra en el combobox de selección.
    pub fn display_label(&self) -> String {
        if self.is_becado() {
            format!("{} - {} (Becado)", self.name, self.email)
        } else {
            format!("{} - {}", self.name, self.email)
        }
    }

    /// Búsqueda por subcadena (case-insensitive) sobre `nombre + email`.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let haystack = format!("{} {}", self.name, self.email).to_lowercase();
        haystack.contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str) -> BackendUser {
        BackendUser {
            id: "u1".into(),
            name: name.into(),
            email: email.into(),
            avatar: None,
            role: "user".into(),
            qr_code: None,
            becado: None,
            estudiante_id: None,
        }
    }

    #[test]
    fn busqueda_insensible_a_mayusculas() {
        let u = user("Ana Pérez", "12-34567@usb.ve");
        assert!(u.matches_query("ana"));
        assert!(u.matches_query("34567"));
        assert!(u.matches_query(""));
        assert!(!u.matches_query("carlos"));
    }
}
