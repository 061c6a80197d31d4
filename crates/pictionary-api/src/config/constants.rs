//! API設定の定数定義

/// アプリケーション名（ログ出力用）
pub const APP_NAME: &str = "Pictionary Single Player API";

/// デフォルトのバインドホスト
///
/// コンテナ内での利用を想定し、全インターフェースで待ち受ける。
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// デフォルトのポート番号
pub const DEFAULT_PORT: u16 = 8000;

/// `POST /word` で使用する単語の最小文字数
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// `POST /word` で使用する単語の最大文字数
pub const DEFAULT_MAX_WORD_LENGTH: usize = 10;

/// リクエストで省略された場合のラウンド時間（秒）
pub const DEFAULT_ROUND_TIME: u32 = 60;

/// デフォルトの CORS 設定（全オリジン許可）
pub const DEFAULT_CORS_ALLOWED_ORIGINS: &str = "*";
