use canonical::{normalize, normalize_with, NormalizeConfig};

fn main() {
    let names = ["José", "JOSE", "Zoë Ångström", "Nguyễn Văn Đức", "CSE2025-001"];

    let keep_marks = NormalizeConfig {
        strip_marks: false,
        ..Default::default()
    };

    for name in names {
        let folded = normalize(name);
        let lowered = normalize_with(name, &keep_marks).expect("default version is valid");
        println!("{name:>16} -> {folded:<16} (lowercase only: {lowered})");
    }
}
