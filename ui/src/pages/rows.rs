use libris_business::models::{Book, BookLoan, EntityId, Fine, Member, Reservation, Subscription};

use crate::widgets::DataRow;

macro_rules! entity_rows {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DataRow for $ty {
                type Id = EntityId;

                fn row_id(&self) -> EntityId {
                    self.id
                }
            }
        )*
    };
}

entity_rows!(Book, BookLoan, Reservation, Fine, Subscription, Member);
