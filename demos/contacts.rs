use chrono::{Duration, TimeZone, Utc};
use chronos_graph::{
    graph::{GraphBuilder, Mode},
    AnalysisConfig,
};

// A day of meetings between colleagues, each one a timestamped undirected contact.
const MEETINGS: [(&str, &str, i64); 7] = [
    ("ana", "ben", 9),
    ("ben", "cho", 10),
    ("cho", "dev", 11),
    ("ana", "eli", 11),
    ("eli", "dev", 13),
    ("dev", "fay", 14),
    ("ben", "ana", 16),
];

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let day = Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap();

    let mut builder = GraphBuilder::new(Mode::Undirected);
    for (a, b, hour) in MEETINGS {
        builder.add_edge(a, b, day + Duration::hours(hour));
    }
    let graph = builder.build().expect("all meetings use calendar times");

    let config = AnalysisConfig::default().with_num_threads(4);

    for path in graph.shortest_temporal_paths(&"ana", &"fay").unwrap() {
        println!("ana -> fay: {}", path.join(" -> "));
    }

    let betweenness = graph.temporal_betweenness_with(&config);
    let closeness = graph.temporal_closeness_with(&config);
    for node in graph.nodes() {
        println!(
            "{node}: betweenness {:.3}, closeness {:.3e}",
            betweenness[node], closeness[node]
        );
    }

    println!("reachability ratio: {:.3}", graph.reachability_ratio_with(&config));
    println!(
        "reachability latency (r = 0.5): {:.3}",
        graph.reachability_latency_with(0.5, &config).unwrap()
    );
}
