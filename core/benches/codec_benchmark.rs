use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use qr_payload::api::*;
use std::hint::black_box;
use std::time::Duration;

fn benchmark_otp(c: &mut Criterion) {
    let mut group = c.benchmark_group("otp");
    group.measurement_time(Duration::from_secs(5));

    let encoded_secret = OtpPayload::new("ACME Co", "user@example.com", "JBSWY3DPEHPK3PXP");
    let plain_secret = OtpPayload::new("ACME Co", "john doe", "correct horse battery staple");

    group.bench_function("encode_base32_secret", |b| {
        b.iter(|| black_box(black_box(&encoded_secret).encode()))
    });
    group.bench_function("encode_plain_secret", |b| {
        b.iter(|| black_box(black_box(&plain_secret).encode()))
    });

    let uri = plain_secret.with_counter(7).encode().unwrap_or_default();
    group.bench_function("parse_hotp_uri", |b| {
        b.iter(|| black_box(OtpPayload::parse(black_box(&uri))))
    });

    group.finish();
}

fn benchmark_wifi(c: &mut Criterion) {
    let mut group = c.benchmark_group("wifi");

    // SSIDs of increasing length with a delimiter every eighth character
    for size in [8usize, 32, 128].iter() {
        let ssid: String = (0..*size)
            .map(|i| if i % 8 == 7 { ';' } else { 'a' })
            .collect();
        let wifi = WifiPayload::new(ssid, "hunter22", WifiSecurity::Wpa);
        let descriptor = wifi.encode().unwrap_or_default();

        group.bench_with_input(BenchmarkId::new("encode", size), &wifi, |b, wifi| {
            b.iter(|| black_box(wifi.encode()))
        });
        group.bench_with_input(BenchmarkId::new("parse", size), &descriptor, |b, descriptor| {
            b.iter(|| black_box(WifiPayload::parse(descriptor)))
        });
    }

    group.finish();
}

fn benchmark_detection(c: &mut Criterion) {
    let inputs = [
        "otpauth://totp/ACME:alice?secret=MFRGG===",
        r#"WIFI:S:\"home\";T:WPA;P:pw;;"#,
        "mailto:team@example.com?subject=hi",
        "SMSTO:+15550100:hello",
        "https://example.com",
        "free text",
    ];

    c.bench_function("parse_any_mixed", |b| {
        b.iter(|| {
            for input in inputs.iter() {
                let _ = black_box(parse_any(black_box(input)));
            }
        })
    });
}

criterion_group!(benches, benchmark_otp, benchmark_wifi, benchmark_detection);
criterion_main!(benches);
