/// Constants module to avoid magic strings in the codebase

// Endpoint Configuration
pub const VERTEX_API_HOST: &str = "googleapis.com";
pub const VERTEX_API_VERSION: &str = "v1";
pub const VERTEX_PUBLISHER: &str = "google";
pub const DEFAULT_LOCATION: &str = "us-central1";
pub const DEFAULT_MODEL_ID: &str = "gemini-1.5-flash-001";
pub const DEFAULT_TOKEN_ENV: &str = "VERTEX_ACCESS_TOKEN";

// Generation probe
pub const PROBE_PROMPT: &str = "Responde solo con la palabra: VERTEX_OK";
pub const PROBE_TEMPERATURE: f64 = 0.2;
pub const PROBE_MAX_OUTPUT_TOKENS: u32 = 10;

// Result messages
pub const CONNECT_OK_MESSAGE: &str = "Conexión autorizada correctamente.";
pub const GENERATE_OK_MESSAGE: &str = "Inferencia ejecutada exitosamente.";
pub const MISSING_TEXT_MESSAGE: &str = "La respuesta no contiene texto válido.";
pub const NETWORK_FAILURE_MESSAGE: &str = "Error de Red / CORS. Asegúrate de que el token es válido. Nota: Las llamadas directas desde navegador a Vertex pueden ser bloqueadas por CORS en algunas configuraciones.";
pub const NO_SAMPLE_MODEL: &str = "N/A";

// Config locations
pub const CONFIG_DIR_NAME: &str = "vertex-probe";
pub const LOCAL_CONFIG_PATH: &str = ".vertex-probe/config.toml";
pub const ENV_PREFIX: &str = "VERTEX_PROBE_";
