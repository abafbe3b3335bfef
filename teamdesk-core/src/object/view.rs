//! Folder-rebinding entity views.
//!
//! A [`FolderView`] presents an entity as if it lived in a different folder,
//! the way shared calendars surface another user's appointments. Only the
//! folder-identifier column is overridden; every other operation forwards to
//! the wrapped entity through the field-access contract.

use crate::columns::{ColumnId, folder_child};
use crate::error::{TeamdeskError, TeamdeskResult};
use crate::fields::FieldAccess;
use crate::object::calendar::CalendarFields;
use crate::object::levels::{CommonFields, FolderChildFields, ObjectFields};
use crate::schema::Schema;
use crate::value::{FieldKind, FieldValue};

#[derive(Debug, Clone)]
pub struct FolderView<T> {
    inner: T,
    /// Override for the folder-identifier column; cleared by `remove`.
    folder: Option<FieldValue>,
}

impl<T: FieldAccess> FolderView<T> {
    pub fn new(inner: T, folder_id: i32) -> FolderView<T> {
        FolderView {
            inner,
            folder: Some(FieldValue::Int(folder_id)),
        }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: FieldAccess> FieldAccess for FolderView<T> {
    fn schema(&self) -> &'static Schema {
        self.inner.schema()
    }

    fn set(&mut self, column: ColumnId, value: FieldValue) -> TeamdeskResult<()> {
        if column == folder_child::FOLDER_ID {
            // Unknown-column dispatch stays with the wrapped entity
            self.inner.contains(column)?;
            if value.kind() != FieldKind::Int {
                return Err(TeamdeskError::TypeMismatch {
                    column,
                    name: "folder_id",
                    expected: FieldKind::Int,
                    actual: value.kind(),
                });
            }
            self.folder = Some(value);
            return Ok(());
        }
        self.inner.set(column, value)
    }

    fn get(&self, column: ColumnId) -> TeamdeskResult<Option<&FieldValue>> {
        if column == folder_child::FOLDER_ID {
            self.inner.contains(column)?;
            if let Some(folder) = &self.folder {
                return Ok(Some(folder));
            }
        }
        self.inner.get(column)
    }

    fn contains(&self, column: ColumnId) -> TeamdeskResult<bool> {
        if column == folder_child::FOLDER_ID && self.folder.is_some() {
            self.inner.contains(column)?;
            return Ok(true);
        }
        self.inner.contains(column)
    }

    /// Removing the folder identifier drops the override, exposing the
    /// wrapped entity's own folder again. Other columns forward.
    fn remove(&mut self, column: ColumnId) -> TeamdeskResult<Option<FieldValue>> {
        if column == folder_child::FOLDER_ID {
            self.inner.contains(column)?;
            if let Some(previous) = self.folder.take() {
                return Ok(Some(previous));
            }
        }
        self.inner.remove(column)
    }

    /// Resets the wrapped entity; the view keeps pointing at its folder.
    fn reset(&mut self) {
        self.inner.reset();
    }
}

impl<T: ObjectFields> ObjectFields for FolderView<T> {}
impl<T: FolderChildFields> FolderChildFields for FolderView<T> {}
impl<T: CommonFields> CommonFields for FolderView<T> {}
impl<T: CalendarFields> CalendarFields for FolderView<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::appointment::Appointment;

    fn appointment_in_folder(folder: i32) -> Appointment {
        let mut a = Appointment::new();
        a.set_folder_id(folder);
        a.set_title("Shared");
        a
    }

    #[test]
    fn test_view_overrides_folder_id_only() {
        let view = FolderView::new(appointment_in_folder(10), 42);
        assert_eq!(view.folder_id(), Some(42));
        assert_eq!(view.title(), Some("Shared"));
        assert_eq!(view.inner().folder_id(), Some(10));
    }

    #[test]
    fn test_view_forwards_writes_to_inner() {
        let mut view = FolderView::new(appointment_in_folder(10), 42);
        view.set_title("Renamed");
        assert_eq!(view.into_inner().title(), Some("Renamed"));
    }

    #[test]
    fn test_setting_folder_id_updates_override() {
        let mut view = FolderView::new(appointment_in_folder(10), 42);
        view.set_folder_id(77);
        assert_eq!(view.folder_id(), Some(77));
        assert_eq!(view.inner().folder_id(), Some(10));
    }

    #[test]
    fn test_removing_override_exposes_inner_folder() {
        let mut view = FolderView::new(appointment_in_folder(10), 42);
        let previous = view.remove(folder_child::FOLDER_ID).unwrap();
        assert_eq!(previous.and_then(|v| v.as_int()), Some(42));
        assert_eq!(view.folder_id(), Some(10));
    }

    #[test]
    fn test_view_keeps_unknown_column_errors() {
        let view = FolderView::new(Appointment::new(), 42);
        assert!(view.get(9999).is_err());
    }
}
