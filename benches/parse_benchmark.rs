use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kiyoh_feed::FeedParser;

// Builds a feed with a company block and `reviews` reviews of five questions each
fn generate_feed(reviews: usize) -> String {
    let questions: String = (1..=5)
        .map(|id| {
            format!(
                "<question><id>{id}</id><title>Vraag {id}</title><score>{}</score></question>",
                5 + id
            )
        })
        .collect();

    let mut xml = String::from("<recent_company_reviews><company><name>Winkel</name>");
    xml.push_str("<url>https://www.kiyoh.nl/winkel/</url>");
    xml.push_str("<category><id>7</id><title>Retail</title></category>");
    xml.push_str("<total_score>8.5</total_score><total_reviews>120</total_reviews>");
    xml.push_str("<total_views>5310</total_views><average_scores>");
    xml.push_str("<review_amount>118</review_amount>");
    xml.push_str(&format!(
        "<questions>{}</questions></average_scores></company><review_list>",
        questions
    ));

    for id in 0..reviews {
        xml.push_str(&format!(
            "<review><id>{id}</id><customer><name>Klant {id}</name><place>Utrecht</place>\
             <date>2017-03-14 12:00:00</date></customer><totalScore>8.2</totalScore>\
             <questions>{questions}</questions><recommended>Ja</recommended>\
             <positive>Snelle levering</positive><negative></negative></review>"
        ));
    }
    xml.push_str("</review_list></recent_company_reviews>");
    xml
}

pub fn parse_benchmark(c: &mut Criterion) {
    let parser = FeedParser::new();
    let mut group = c.benchmark_group("feed_parser");

    // A feed page normally carries 10 reviews; larger sizes show scaling
    for reviews in [10usize, 100, 1000].iter() {
        let xml = generate_feed(*reviews);
        group.bench_with_input(BenchmarkId::new("parse_reviews", reviews), &xml, |b, xml| {
            b.iter(|| parser.parse_reviews(black_box(xml)))
        });
    }

    let xml = generate_feed(10);
    group.bench_function("parse_company", |b| {
        b.iter(|| parser.parse_company(black_box(&xml), 1042))
    });

    group.finish();
}

criterion_group!(benches, parse_benchmark);
criterion_main!(benches);
