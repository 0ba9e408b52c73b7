// Host-side tests for asset header inspection.

#![allow(dead_code)]
mod core {
    pub mod error {
        include!("../src/core/error.rs");
    }
    pub mod assets {
        include!("../src/core/assets.rs");
    }
}

use crate::core::assets::*;
use crate::core::error::SceneError;

fn glb(json: &str) -> Vec<u8> {
    // JSON chunk is space-padded to 4 bytes like real exporters do.
    let mut body = json.as_bytes().to_vec();
    while body.len() % 4 != 0 {
        body.push(b' ');
    }
    let total = 12 + 8 + body.len();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(b"glTF");
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(body.len() as u32).to_le_bytes());
    out.extend_from_slice(b"JSON");
    out.extend_from_slice(&body);
    out
}

#[test]
fn reads_glb_header_and_json_chunk() {
    let bytes = glb(r#"{"asset":{"version":"2.0"}}"#);
    let info = inspect_glb(&bytes).expect("valid glb");
    assert_eq!(info.version, 2);
    assert_eq!(info.byte_length as usize, bytes.len());
    assert_eq!(info.json_length, 28);
    assert!(!info.draco_compressed);
}

#[test]
fn detects_draco_extension() {
    let bytes = glb(r#"{"extensionsUsed":["KHR_draco_mesh_compression"]}"#);
    assert!(inspect_glb(&bytes).unwrap().draco_compressed);
}

#[test]
fn rejects_bad_magic() {
    let mut bytes = glb("{}");
    bytes[0] = b'x';
    assert_eq!(
        inspect_glb(&bytes),
        Err(SceneError::MalformedModel("bad magic"))
    );
}

#[test]
fn rejects_truncated_glb() {
    assert_eq!(
        inspect_glb(b"glT"),
        Err(SceneError::MalformedModel("truncated header"))
    );
    let bytes = glb("{}");
    assert_eq!(
        inspect_glb(&bytes[..bytes.len() - 1]),
        Err(SceneError::MalformedModel("declared length exceeds payload"))
    );
}

#[test]
fn rejects_json_chunk_longer_than_declared_length() {
    let mut bytes = glb("{}");
    bytes[12..16].copy_from_slice(&u32::MAX.to_le_bytes());
    assert_eq!(
        inspect_glb(&bytes),
        Err(SceneError::MalformedModel("json chunk exceeds declared length"))
    );

    // Trailing bytes past the declared length do not count as chunk data.
    let mut padded = glb("{}");
    padded.extend_from_slice(b"    ");
    padded[12..16].copy_from_slice(&8u32.to_le_bytes());
    assert_eq!(
        inspect_glb(&padded),
        Err(SceneError::MalformedModel("json chunk exceeds declared length"))
    );
}

#[test]
fn rejects_non_json_first_chunk() {
    let mut bytes = glb("{}");
    bytes[16..20].copy_from_slice(b"BIN\0");
    assert_eq!(
        inspect_glb(&bytes),
        Err(SceneError::MalformedModel("first chunk is not json"))
    );
}

fn hdr(header: &str) -> Vec<u8> {
    let mut out = header.as_bytes().to_vec();
    out.extend_from_slice(&[2, 2, 0, 16, 0xff, 0x80]);
    out
}

#[test]
fn reads_radiance_header() {
    let bytes = hdr("#?RADIANCE\nGAMMA=1\nFORMAT=32-bit_rle_rgbe\n\n-Y 1024 +X 2048\n");
    let info = inspect_hdr(&bytes).expect("valid hdr");
    assert_eq!(info.format, "32-bit_rle_rgbe");
    assert_eq!(info.width, 2048);
    assert_eq!(info.height, 1024);
}

#[test]
fn accepts_rgbe_signature_and_crlf() {
    let bytes = hdr("#?RGBE\r\nFORMAT=32-bit_rle_rgbe\r\n\r\n-Y 8 +X 16\r\n");
    let info = inspect_hdr(&bytes).unwrap();
    assert_eq!((info.width, info.height), (16, 8));
}

#[test]
fn rejects_malformed_hdr() {
    assert_eq!(
        inspect_hdr(b"P6\n16 8\n255\n"),
        Err(SceneError::MalformedEnvironment("missing radiance signature"))
    );
    assert_eq!(
        inspect_hdr(b"#?RADIANCE\nFORMAT=32-bit_rle_rgbe"),
        Err(SceneError::MalformedEnvironment("unterminated header"))
    );
    assert_eq!(
        inspect_hdr(b"#?RADIANCE\nFORMAT=32-bit_rle_rgbe\n\n"),
        Err(SceneError::MalformedEnvironment("missing resolution line"))
    );
    assert_eq!(
        inspect_hdr(&hdr("#?RADIANCE\n\n-Y 8 +X 16\n")),
        Err(SceneError::MalformedEnvironment("missing FORMAT"))
    );
    assert_eq!(
        inspect_hdr(&hdr("#?RADIANCE\nFORMAT=32-bit_rle_rgbe\n\n+X 16 -Y 8\n")),
        Err(SceneError::MalformedEnvironment("unsupported resolution line"))
    );
}
