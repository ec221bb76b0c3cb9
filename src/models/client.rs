use serde::Serialize;

/// One row of the `clientes` table.
///
/// The id is assigned by SQLite (AUTOINCREMENT) and is never reused within
/// a schema generation. Name, email and phone are free-form text with no
/// uniqueness or non-empty constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Client {
    pub id: i64,
    pub name: String,    // ⇔ clientes.NOME
    pub email: String,   // ⇔ clientes.EMAIL
    pub phone: String,   // ⇔ clientes.TELEFONE
}

impl Client {
    /// Render the record as one labeled paragraph, the format used by the
    /// view modal.
    pub fn paragraph(&self) -> String {
        format!(
            "Id : {}\nNome : {}\nEmail : {}\nTelefone : {}\n",
            self.id, self.name, self.email, self.phone
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraph_labels_every_field() {
        let c = Client {
            id: 7,
            name: "Ana".into(),
            email: "ana@x.com".into(),
            phone: "111".into(),
        };
        let p = c.paragraph();
        assert!(p.contains("Id : 7"));
        assert!(p.contains("Nome : Ana"));
        assert!(p.contains("Email : ana@x.com"));
        assert!(p.contains("Telefone : 111"));
    }

    #[test]
    fn paragraph_keeps_empty_fields_labeled() {
        let c = Client {
            id: 1,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
        };
        assert_eq!(c.paragraph(), "Id : 1\nNome : \nEmail : \nTelefone : \n");
    }
}
