//!
//! The artifact registry tests.
//!

use std::path::PathBuf;

use super::artifact::Artifact;
use super::Registry;

fn fixtures() -> Registry {
    let directory = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/artifacts");
    Registry::new(directory.as_path()).expect("Fixtures directory exists")
}

const PROFILE_SELECTOR: [u8; 4] = [0xab, 0x60, 0x63, 0x6c];

#[test]
fn missing_directory() {
    let error = Registry::new(PathBuf::from("./does/not/exist").as_path()).unwrap_err();
    assert!(error.to_string().contains("does not exist"));
}

#[test]
fn flat_layout() {
    let artifact = fixtures().require("A").expect("Artifact exists");
    assert_eq!(artifact.name, "A");
    assert!(!artifact.bytecode.is_empty());
    assert_eq!(artifact.deployed_bytecode.len(), 30);
}

#[test]
fn nested_layout() {
    let registry = fixtures();
    let path = registry.resolve("B").expect("Artifact exists");
    assert!(path.ends_with("contracts/B.sol/B.json"));

    let artifact = registry.require("B").expect("Artifact exists");
    assert_eq!(artifact.name, "B");
}

#[test]
fn not_found() {
    let error = fixtures().require("C").unwrap_err();
    assert!(error
        .to_string()
        .contains("Could not find artifacts for contract `C`"));
}

#[test]
fn ambiguous() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    for source in ["First.sol", "Second.sol"] {
        let nested = directory.path().join(source);
        std::fs::create_dir_all(nested.as_path()).expect("Temporary directory");
        std::fs::write(
            nested.join("Twin.json"),
            r#"{ "abi": [], "bytecode": { "object": "0x00" } }"#,
        )
        .expect("Temporary file");
    }

    let registry = Registry::new(directory.path()).expect("Directory exists");
    let error = registry.require("Twin").unwrap_err();
    assert!(error.to_string().contains("Contract `Twin` is ambiguous"));
}

#[test]
fn mismatching_contract_name() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    std::fs::write(
        directory.path().join("A.json"),
        r#"{ "contractName": "NotA", "abi": [], "bytecode": "0x00" }"#,
    )
    .expect("Temporary file");

    let registry = Registry::new(directory.path()).expect("Directory exists");
    let error = registry.require("A").unwrap_err();
    assert!(error.to_string().contains("describes contract `NotA`"));
}

#[test]
fn foundry_layout_takes_name_from_file() {
    let artifact = Artifact::from_json(
        "Counter",
        r#"{
            "abi": [{ "type": "function", "name": "profile", "inputs": [], "outputs": [], "stateMutability": "nonpayable" }],
            "bytecode": { "object": "0x6080", "linkReferences": {} },
            "deployedBytecode": { "object": "0x6080" }
        }"#,
    )
    .expect("Valid artifact");

    assert_eq!(artifact.name, "Counter");
    assert_eq!(artifact.bytecode, vec![0x60, 0x80]);
}

#[test]
fn calldata_is_the_selector() {
    let artifact = fixtures().require("A").expect("Artifact exists");
    let calldata = artifact.calldata("profile").expect("Method exists");
    assert_eq!(calldata, PROFILE_SELECTOR.to_vec());
}

#[test]
fn missing_method() {
    let artifact = fixtures().require("Silent").expect("Artifact exists");
    let error = artifact.calldata("profile").unwrap_err();
    assert!(error
        .to_string()
        .contains("Contract `Silent` has no method `profile`"));
}

#[test]
fn overloaded_method() {
    let artifact = Artifact::from_json(
        "Overloaded",
        r#"{
            "abi": [
                { "type": "function", "name": "profile", "inputs": [], "outputs": [], "stateMutability": "nonpayable" },
                { "type": "function", "name": "profile", "inputs": [{ "name": "rounds", "type": "uint256" }], "outputs": [], "stateMutability": "nonpayable" }
            ],
            "bytecode": "0x00"
        }"#,
    )
    .expect("Valid artifact");

    let error = artifact.method("profile").unwrap_err();
    assert!(error.to_string().contains("is overloaded"));
}

#[test]
fn method_with_arguments() {
    let artifact = Artifact::from_json(
        "Parametric",
        r#"{
            "abi": [{ "type": "function", "name": "profile", "inputs": [{ "name": "rounds", "type": "uint256" }], "outputs": [], "stateMutability": "nonpayable" }],
            "bytecode": "0x00"
        }"#,
    )
    .expect("Valid artifact");

    let error = artifact.calldata("profile").unwrap_err();
    assert!(error.to_string().contains("expects 1 arguments"));
}

#[test]
fn interface_is_not_deployable() {
    let artifact = fixtures().require("IProfiler").expect("Artifact exists");
    let error = artifact.deploy_code().unwrap_err();
    assert!(error.to_string().contains("cannot be deployed"));
}

#[test]
fn constructor_arguments_are_not_supplied() {
    let artifact = fixtures().require("Constructed").expect("Artifact exists");
    let error = artifact.deploy_code().unwrap_err();
    assert!(error.to_string().contains("constructor expects 1 arguments"));
}

#[test]
fn unlinked_library_is_reported_with_the_contract() {
    let error = Artifact::from_json(
        "Linked",
        r#"{ "abi": [], "bytecode": "0x73__$a9d4e1d7f0de9e5a3a5d8bcd29d1e6a5f2$__" }"#,
    )
    .unwrap_err();

    let chain = format!("{error:#}");
    assert!(chain.contains("Contract `Linked` creation bytecode"));
    assert!(chain.contains("unlinked library placeholder"));
}

#[test]
fn nested_layout_under_glob_metacharacters() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let root = directory.path().join("build[x]");
    let nested = root.join("contracts").join("B.sol");
    std::fs::create_dir_all(nested.as_path()).expect("Temporary directory");
    std::fs::copy(
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/artifacts/contracts/B.sol/B.json"),
        nested.join("B.json"),
    )
    .expect("Temporary file");

    let registry = Registry::new(root.as_path()).expect("Directory exists");
    let artifact = registry.require("B").expect("Artifact exists");
    assert_eq!(artifact.name, "B");
    assert_eq!(
        registry.resolve("B").expect("Artifact exists"),
        nested.join("B.json")
    );
}
