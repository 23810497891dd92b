//! Record builders mirroring the scheduling API's booked payloads.

use daybook_domain::{BookedAppointment, BookingData, RawAppointment, StaffMemberTreatment};

/// Builder for a booked record; defaults to an unpaid 30-minute "Cut".
pub struct BookedBuilder {
    record: BookedAppointment,
}

impl BookedBuilder {
    pub fn new(customer: &str, time: &str) -> Self {
        Self {
            record: BookedAppointment {
                time: time.to_string(),
                time_datepart: time.split_once('T').map(|(date, _)| date.to_string()),
                time_timepart: time.split_once('T').map(|(_, clock)| clock.to_string()),
                paid_online: false,
                paid_online_amount: None,
                customer_full_name: customer.to_string(),
                data: BookingData {
                    staff_member_treatment: StaffMemberTreatment {
                        total_duration: 1800,
                        price: 20.0,
                        name: "Cut".to_string(),
                    },
                },
            },
        }
    }

    pub fn treatment(mut self, name: &str, seconds: u32) -> Self {
        self.record.data.staff_member_treatment.name = name.to_string();
        self.record.data.staff_member_treatment.total_duration = seconds;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.record.data.staff_member_treatment.price = price;
        self
    }

    pub fn paid_online(mut self, amount: f64) -> Self {
        self.record.paid_online = true;
        self.record.paid_online_amount = Some(amount);
        self
    }

    pub fn build(self) -> BookedAppointment {
        self.record
    }

    pub fn raw(self) -> RawAppointment {
        RawAppointment::Booked(self.record)
    }
}

/// Fernando's 10:00 cut (30 min).
pub fn fernando_cut() -> RawAppointment {
    BookedBuilder::new("Fernando", "2024-05-23T10:00:00").treatment("Cut", 1800).raw()
}

/// Fernando's 10:30 beard trim (15 min).
pub fn fernando_beard() -> RawAppointment {
    BookedBuilder::new("Fernando", "2024-05-23T10:30:00").treatment("Beard", 900).raw()
}
