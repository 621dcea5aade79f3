use crate::core::domain::Identifiable;

pub mod model;

// Book is the read-side view shared by the stored entity and its snapshots, the id is the isbn.
pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn publication_year(&self) -> i32;
    fn available_copies(&self) -> u32;

    fn is_available(&self) -> bool {
        self.available_copies() > 0
    }
}
