use std::{env, fs, path::PathBuf};

const BLOCK_SIZE_ENV: &str = "MATMUL_BLOCKSZ";
const DEFAULT_BLOCK_SIZE: usize = 1;

fn block_size() -> usize {
    let Ok(raw) = env::var(BLOCK_SIZE_ENV) else {
        return DEFAULT_BLOCK_SIZE;
    };
    match raw.trim().parse::<usize>() {
        Ok(0) | Err(_) => panic!("{BLOCK_SIZE_ENV} must be a positive integer, got {raw:?}"),
        Ok(size) => size,
    }
}

fn main() {
    println!("cargo:rerun-if-env-changed={BLOCK_SIZE_ENV}");
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set by cargo"));
    let generated = format!(
        "/// Tile edge used by the blocked routines (`{BLOCK_SIZE_ENV}` at build time).\n\
         pub const BLOCK_SIZE: usize = {};\n",
        block_size()
    );
    fs::write(out_dir.join("block_size.rs"), generated).expect("failed to write block_size.rs");
}
