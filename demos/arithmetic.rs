use gridwise::{OperationKind, apply, apply_scalar, grid};

fn main() {
    let a = grid![[1, 2], [3, 4]].unwrap();
    let b = grid![[5, 6], [7, 8]].unwrap();

    println!("Testing tag-dispatched grid arithmetic:");
    println!("a =\n{}", a);
    println!("b =\n{}", b);
    println!();

    for kind in OperationKind::ALL {
        let tag = kind.to_string();
        let result = if kind.is_scalar() {
            apply_scalar(&tag, &a, 2.0)
        } else {
            apply(&tag, &a, &b)
        };
        match result {
            Ok(grid) => println!("{} ({}):\n{:.2}\n", kind.display_name(), tag, grid),
            Err(e) => println!("{} failed: {}", tag, e),
        }
    }

    // Shape mismatch
    let wide = grid![[1, 2, 3]].unwrap();
    if let Err(e) = apply("m_add", &a, &wide) {
        println!("Expected error: {}", e);
    }
}
