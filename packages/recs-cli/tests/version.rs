#[test]
fn version_carries_package_version_and_target_triple() {
	let prefix = concat!(env!("CARGO_PKG_VERSION"), "-");
	let triple = recs_cli::VERSION
		.strip_prefix(prefix)
		.expect("Version must start with the package version.");

	assert!(!triple.is_empty());
	assert_eq!(triple, env!("VERGEN_CARGO_TARGET_TRIPLE"));
}
