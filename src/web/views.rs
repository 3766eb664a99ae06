use crate::models::Booking;
use maud::{html, Markup, DOCTYPE};

/// Admin page listing every booking request
pub fn admin_dashboard(bookings: &[Booking]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Admin Dashboard" }
            }
            body {
                header {
                    h1 { "Admin Dashboard" }
                    p { "Manage and view all student accommodation requests." }
                    div.total {
                        span.label { "Total Bookings:" }
                        span.count { (bookings.len()) }
                    }
                }
                @if bookings.is_empty() {
                    section.empty {
                        h3 { "No bookings yet" }
                        p { "Student bookings will appear here once they are submitted." }
                    }
                } @else {
                    table {
                        thead {
                            tr {
                                th { "Property" }
                                th { "Student Details" }
                                th { "Booking Info" }
                                th { "Submitted" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            @for booking in bookings {
                                (booking_row(booking))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn booking_row(booking: &Booking) -> Markup {
    let short_id: String = booking.hostel_id.chars().take(8).collect();

    html! {
        tr data-id=(booking.id) {
            td.property {
                p.name { (booking.hostel_name) }
                p.hostel-id { "ID: " (short_id) }
            }
            td.student {
                p.student-name { (booking.student_name) }
                p.phone { (booking.phone_number) }
                p.email { (booking.email) }
            }
            td.info {
                p { "Move In: " span.move-in { (booking.move_in_date) } }
                p { "Duration: " span.duration { (booking.duration.label()) } }
            }
            td.submitted { (booking.submitted_at.format("%Y-%m-%d").to_string()) }
            td.status { "New Request" }
        }
    }
}
