use chrono::{TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hh_translate::store::HandAccumulator;
use hh_translate::translate::{HandTranslator, TranslatorConfig};

fn hand_lines(id: usize) -> Vec<String> {
    vec![
        "[B] CPokers Hand".to_string(),
        format!("Hand #{id} Played at 2024-01-01T00:00:00.000Z"),
        "Button is in seat 2".to_string(),
        "Dealt A♥5♣ Preflop".to_string(),
        "P1 posts 1".to_string(),
        "Hero posts 2".to_string(),
        "P1 calls 1".to_string(),
        "Hero checks".to_string(),
        "Flop: 3♣ 4♣ 5♣".to_string(),
        "P1 bets 4".to_string(),
        "Hero calls 4".to_string(),
        "Turn: K♦".to_string(),
        "River: 9♠".to_string(),
        "P1 shows A♣2♦ (straight flush)".to_string(),
        "Hero mucks".to_string(),
        "P1 collects 12 from pot".to_string(),
        "SummaryTotal pot 12".to_string(),
        "Board 3♣ 4♣ 5♣ K♦ 9♠".to_string(),
    ]
}

fn bench_translate(c: &mut Criterion) {
    let translator = HandTranslator::new(TranslatorConfig::default());
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let lines = hand_lines(1);
    let raw = lines.join("\n");

    c.bench_function("translate_hand", |b| {
        b.iter(|| translator.translate_at(&raw, &lines, now).unwrap());
    });
}

fn bench_accumulate(c: &mut Criterion) {
    let translator = HandTranslator::new(TranslatorConfig::default());
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut group = c.benchmark_group("accumulate_and_export");

    for count in [100, 1000] {
        let records: Vec<_> = (0..count)
            .rev()
            .map(|id| {
                let lines = hand_lines(id);
                translator
                    .translate_at(&lines.join("\n"), &lines, now)
                    .unwrap()
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("hands", count), &records, |b, records| {
            b.iter(|| {
                let mut store = HandAccumulator::new();
                for record in records {
                    store.insert(record.clone());
                }
                store.export_all().unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_translate, bench_accumulate);
criterion_main!(benches);
