use crate::core::assets::{inspect_glb, inspect_hdr, AssetManifest};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, resp.status());
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("read {}: {:?}", url, e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

async fn load_model(manifest: &AssetManifest) -> anyhow::Result<()> {
    let bytes = fetch_bytes(manifest.model_url).await?;
    let info = inspect_glb(&bytes)?;
    log::info!(
        "[assets] model glb v{} {} bytes (json {}), draco={}",
        info.version,
        info.byte_length,
        info.json_length,
        info.draco_compressed
    );
    if info.draco_compressed {
        log::info!("[assets] draco decoder path {}", manifest.draco_decoder_path);
    }
    Ok(())
}

async fn load_environment(manifest: &AssetManifest) -> anyhow::Result<()> {
    let bytes = fetch_bytes(manifest.environment_url).await?;
    let info = inspect_hdr(&bytes)?;
    log::info!(
        "[assets] environment {} {}x{} (equirectangular)",
        info.format,
        info.width,
        info.height
    );
    Ok(())
}

/// Fetches and checks the model and environment map. Failures are logged;
/// the scene keeps rendering without them.
pub async fn load_scene_assets(manifest: AssetManifest) {
    if let Err(e) = load_environment(&manifest).await {
        log::warn!("[assets] environment unavailable: {:?}", e);
    }
    if let Err(e) = load_model(&manifest).await {
        log::warn!("[assets] model unavailable: {:?}", e);
    }
}
