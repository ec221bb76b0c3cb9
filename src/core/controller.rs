//! Interaction controller: binds the three user actions (save, view,
//! clear) to the record store and the presentation surface.
//!
//! Each handler is stateless request/response; the controller owns no
//! persistent state of its own.

use crate::db::RecordStore;
use crate::errors::AppResult;
use crate::ui::fields::Fields;
use crate::ui::surface::Surface;

pub struct Controller<'a> {
    store: &'a RecordStore,
}

impl<'a> Controller<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Save action: read the current field values (possibly empty) and
    /// insert them. Emits "Data Inserted" / "Data not Inserted"; fields are
    /// left untouched. Returns the insert outcome for the caller's audit
    /// trail.
    pub fn on_save(&self, fields: &dyn Fields, surface: &mut dyn Surface) -> bool {
        let inserted =
            self.store
                .insert_record(&fields.name(), &fields.email(), &fields.phone());

        if inserted {
            surface.notify("Data Inserted");
        } else {
            surface.notify("Data not Inserted");
        }
        inserted
    }

    /// View action: stream every record into one labeled paragraph per
    /// record and show the block in a modal. An empty store only emits the
    /// "No Data Found" notification; no modal is shown.
    pub fn on_view(&self, surface: &mut dyn Surface) -> AppResult<()> {
        let mut body = String::new();
        let count = self.store.query_all(|client| {
            body.push_str(&client.paragraph());
            body.push('\n');
            Ok(())
        })?;

        if count == 0 {
            surface.notify("No Data Found");
            return Ok(());
        }

        surface.show_modal("Data", body.trim_end());
        Ok(())
    }

    /// Clear action: reset the input fields. Never touches the store.
    pub fn on_clear(&self, fields: &mut dyn Fields) {
        fields.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::fields::FieldSet;

    /// Recording surface: collects notifications and modals instead of
    /// printing them.
    #[derive(Default)]
    struct RecordingSurface {
        notices: Vec<String>,
        modals: Vec<(String, String)>,
    }

    impl Surface for RecordingSurface {
        fn notify(&mut self, message: &str) {
            self.notices.push(message.to_string());
        }

        fn show_modal(&mut self, title: &str, body: &str) {
            self.modals.push((title.to_string(), body.to_string()));
        }
    }

    #[test]
    fn save_notifies_inserted_and_keeps_fields() {
        let store = RecordStore::open_in_memory().unwrap();
        let controller = Controller::new(&store);
        let fields = FieldSet::new("Ana", "ana@x.com", "111");
        let mut surface = RecordingSurface::default();

        assert!(controller.on_save(&fields, &mut surface));

        assert_eq!(surface.notices, vec!["Data Inserted"]);
        assert_eq!(fields.name, "Ana");
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn save_failure_notifies_not_inserted() {
        let store = RecordStore::open_in_memory().unwrap();
        // Force an insertion failure by removing the table underneath.
        store
            .conn()
            .execute_batch("DROP TABLE clientes;")
            .unwrap();

        let controller = Controller::new(&store);
        let fields = FieldSet::new("Ana", "", "");
        let mut surface = RecordingSurface::default();

        assert!(!controller.on_save(&fields, &mut surface));
        assert_eq!(surface.notices, vec!["Data not Inserted"]);
    }

    #[test]
    fn view_on_empty_store_notifies_without_modal() {
        let store = RecordStore::open_in_memory().unwrap();
        let controller = Controller::new(&store);
        let mut surface = RecordingSurface::default();

        controller.on_view(&mut surface).unwrap();

        assert_eq!(surface.notices, vec!["No Data Found"]);
        assert!(surface.modals.is_empty());
    }

    #[test]
    fn view_shows_one_paragraph_per_record() {
        let store = RecordStore::open_in_memory().unwrap();
        assert!(store.insert_record("Ana", "ana@x.com", "111"));
        assert!(store.insert_record("Bo", "bo@x.com", "222"));

        let controller = Controller::new(&store);
        let mut surface = RecordingSurface::default();
        controller.on_view(&mut surface).unwrap();

        assert!(surface.notices.is_empty());
        assert_eq!(surface.modals.len(), 1);
        let (title, body) = &surface.modals[0];
        assert_eq!(title, "Data");
        assert!(body.contains("Nome : Ana"));
        assert!(body.contains("Telefone : 222"));
        // Two paragraphs separated by a blank line.
        assert_eq!(body.matches("Id : ").count(), 2);
        assert!(body.contains("\n\n"));
    }

    #[test]
    fn saving_empty_fields_still_inserts() {
        let store = RecordStore::open_in_memory().unwrap();
        let controller = Controller::new(&store);
        let fields = FieldSet::default();
        let mut surface = RecordingSurface::default();

        assert!(controller.on_save(&fields, &mut surface));
        assert_eq!(surface.notices, vec!["Data Inserted"]);

        let rows = store.load_all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "");
    }

    #[test]
    fn clear_resets_fields_and_leaves_store_alone() {
        let store = RecordStore::open_in_memory().unwrap();
        assert!(store.insert_record("Ana", "", ""));

        let controller = Controller::new(&store);
        let mut fields = FieldSet::new("Bo", "bo@x.com", "222");
        controller.on_clear(&mut fields);

        assert!(fields.is_empty());
        assert_eq!(store.load_all().unwrap().len(), 1);
    }
}
