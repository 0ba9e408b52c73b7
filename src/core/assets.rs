use crate::core::error::SceneError;

#[derive(Clone, Debug, PartialEq)]
pub struct AssetManifest {
    pub model_url: &'static str,
    pub draco_decoder_path: &'static str,
    pub environment_url: &'static str,
}

const GLB_MAGIC: u32 = 0x4654_6C67; // "glTF"
const GLB_CHUNK_JSON: u32 = 0x4E4F_534A; // "JSON"
const GLB_HEADER_LEN: usize = 12;
const DRACO_EXTENSION: &[u8] = b"KHR_draco_mesh_compression";

#[derive(Clone, Debug, PartialEq)]
pub struct ModelInfo {
    pub version: u32,
    pub byte_length: u32,
    pub json_length: u32,
    pub draco_compressed: bool,
}

#[inline]
fn read_u32_le(bytes: &[u8], at: usize) -> Option<u32> {
    let b = bytes.get(at..at + 4)?;
    Some(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

pub fn inspect_glb(bytes: &[u8]) -> Result<ModelInfo, SceneError> {
    let magic = read_u32_le(bytes, 0).ok_or(SceneError::MalformedModel("truncated header"))?;
    if magic != GLB_MAGIC {
        return Err(SceneError::MalformedModel("bad magic"));
    }
    let version = read_u32_le(bytes, 4).ok_or(SceneError::MalformedModel("truncated header"))?;
    let byte_length =
        read_u32_le(bytes, 8).ok_or(SceneError::MalformedModel("truncated header"))?;
    if byte_length as usize > bytes.len() {
        return Err(SceneError::MalformedModel("declared length exceeds payload"));
    }
    let json_length = read_u32_le(bytes, GLB_HEADER_LEN)
        .ok_or(SceneError::MalformedModel("missing json chunk"))?;
    let chunk_type = read_u32_le(bytes, GLB_HEADER_LEN + 4)
        .ok_or(SceneError::MalformedModel("missing json chunk"))?;
    if chunk_type != GLB_CHUNK_JSON {
        return Err(SceneError::MalformedModel("first chunk is not json"));
    }
    let json_start = GLB_HEADER_LEN + 8;
    let json_end = usize::try_from(json_length)
        .ok()
        .and_then(|len| json_start.checked_add(len))
        .filter(|end| *end <= byte_length as usize)
        .ok_or(SceneError::MalformedModel("json chunk exceeds declared length"))?;
    let json = bytes
        .get(json_start..json_end)
        .ok_or(SceneError::MalformedModel("json chunk exceeds payload"))?;
    let draco_compressed = json
        .windows(DRACO_EXTENSION.len())
        .any(|w| w == DRACO_EXTENSION);
    Ok(ModelInfo {
        version,
        byte_length,
        json_length,
        draco_compressed,
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnvironmentInfo {
    pub format: String,
    pub width: u32,
    pub height: u32,
}

pub fn inspect_hdr(bytes: &[u8]) -> Result<EnvironmentInfo, SceneError> {
    if !(bytes.starts_with(b"#?RADIANCE") || bytes.starts_with(b"#?RGBE")) {
        return Err(SceneError::MalformedEnvironment("missing radiance signature"));
    }
    let mut lines = bytes.split(|b| *b == b'\n');
    let mut format = None;
    let mut blank_seen = false;
    for line in lines.by_ref() {
        let line = std::str::from_utf8(line)
            .map_err(|_| SceneError::MalformedEnvironment("non-utf8 header"))?
            .trim_end_matches('\r');
        if line.is_empty() {
            blank_seen = true;
            break;
        }
        if let Some(v) = line.strip_prefix("FORMAT=") {
            format = Some(v.to_string());
        }
    }
    if !blank_seen {
        return Err(SceneError::MalformedEnvironment("unterminated header"));
    }
    let resolution = lines
        .next()
        .and_then(|l| std::str::from_utf8(l).ok())
        .ok_or(SceneError::MalformedEnvironment("missing resolution line"))?;
    let (height, width) = parse_resolution(resolution.trim_end_matches('\r'))
        .ok_or(SceneError::MalformedEnvironment("unsupported resolution line"))?;
    Ok(EnvironmentInfo {
        format: format.ok_or(SceneError::MalformedEnvironment("missing FORMAT"))?,
        width,
        height,
    })
}

// Standard orientation only: "-Y <height> +X <width>"
fn parse_resolution(line: &str) -> Option<(u32, u32)> {
    let mut parts = line.split_whitespace();
    if parts.next()? != "-Y" {
        return None;
    }
    let h = parts.next()?.parse().ok()?;
    if parts.next()? != "+X" {
        return None;
    }
    let w = parts.next()?.parse().ok()?;
    Some((h, w))
}
