//! th-bench: micro-benchmarks live under `benches/`.
