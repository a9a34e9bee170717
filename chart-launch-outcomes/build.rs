use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy launches.csv to OUT_DIR for include_str
    let launches_src = Path::new("../fixtures/launches.csv");
    if launches_src.exists() {
        fs::copy(launches_src, Path::new(&out_dir).join("launches.csv")).unwrap();
    } else {
        fs::write(
            Path::new(&out_dir).join("launches.csv"),
            ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0\n",
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/launches.csv");
}
