/// Booking joined with its activity, as returned by the my-bookings listing.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BookingWithActivityRow {
    pub id: String,
    pub booked_at: String,
    pub activity_id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub location: String,
    pub max_participants: i64,
    pub current_participants: i64,
    pub activity_created_at: String,
}
