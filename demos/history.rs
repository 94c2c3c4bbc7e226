use gridwise::{Grid, History};

fn main() {
    let a = Grid::identity(3, 3).unwrap();
    let b = Grid::filled(3, 3, 4.0).unwrap();

    let mut history = History::new();
    history.run("m_add", &a, &b).unwrap();
    history.run("s_exp", &b, 0.5).unwrap();
    history.run("m_div", &b, &a).unwrap();

    for record in history.iter() {
        let (rows, cols) = record.shape();
        println!(
            "[{}] {} - {:?} | Size: {}×{}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S"),
            record.kind.display_name(),
            record.elapsed,
            rows,
            cols
        );
        println!("{:.2}\n", record.result);
    }

    let metrics = history.metrics();
    println!("Total operations: {}", metrics.operations);
    if let (Some(avg), Some(ops)) = (metrics.average(), metrics.ops_per_sec()) {
        println!("Average time: {:?} ({:.2} ops/sec)", avg, ops);
    }
}
