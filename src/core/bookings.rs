use crate::models::Booking;

/// Fields a booking may reference its hotel, tour or flight by
const ITEM_ID_FIELDS: [&str; 4] = ["hotelId", "tourId", "flightId", "itemId"];

/// Check whether `email` already holds a booking for `item_id`
///
/// E-mails compare case-insensitively, item ids exactly.
pub fn has_existing_booking(bookings: &[Booking], email: &str, item_id: &str) -> bool {
    bookings.iter().any(|booking| {
        let same_user = booking
            .field("email")
            .map(|e| e.eq_ignore_ascii_case(email))
            .unwrap_or(false);

        same_user
            && ITEM_ID_FIELDS
                .iter()
                .any(|field| booking.field(field) == Some(item_id))
    })
}
