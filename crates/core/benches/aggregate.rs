use criterion::{black_box, criterion_group, criterion_main, Criterion};
use daybook_core::{aggregate, DisplayZone};
use daybook_domain::{BookedAppointment, BookingData, RawAppointment, StaffMemberTreatment};

const CUSTOMERS: [&str; 8] =
    ["Fernando", "Lucia", "Marta", "Ana", "Pablo", "Carmen", "Jorge", "Elena"];

fn sample_day(records: usize) -> Vec<RawAppointment> {
    (0..records)
        .map(|idx| {
            if idx % 7 == 0 {
                return RawAppointment::Deleted;
            }

            let minutes = 9 * 60 + (idx * 15) % (10 * 60);
            RawAppointment::Booked(BookedAppointment {
                time: format!("2024-05-23T{:02}:{:02}:00", minutes / 60, minutes % 60),
                time_datepart: None,
                time_timepart: None,
                paid_online: idx % 3 == 0,
                paid_online_amount: None,
                customer_full_name: CUSTOMERS[idx % CUSTOMERS.len()].to_string(),
                data: BookingData {
                    staff_member_treatment: StaffMemberTreatment {
                        total_duration: 900 * (1 + (idx % 4) as u32),
                        price: 15.0,
                        name: format!("Treatment {idx}"),
                    },
                },
            })
        })
        .collect()
}

fn aggregate_benchmark(c: &mut Criterion) {
    let zone = DisplayZone::resolve("Europe/Berlin").expect("zone");

    let mut group = c.benchmark_group("reconcile");
    group.sample_size(50);

    for size in [16_usize, 128, 1024] {
        let records = sample_day(size);
        group.bench_function(format!("aggregate_{size}"), |b| {
            b.iter(|| aggregate(black_box(&records), &zone).unwrap());
        });
    }

    group.finish();
}

criterion_group!(core_benchmarks, aggregate_benchmark);
criterion_main!(core_benchmarks);
