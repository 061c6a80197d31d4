//! pictionary 単語選択ライブラリー
//!
//! お絵描き当てゲームのお題となる単語を、文字数の制約付きでランダムに選ぶ

/// 文字数制約モジュール - LengthRange を定義
pub mod constraints;

/// コーパスモジュール - 組み込み単語リストと単語リストファイルの読み込み
pub mod corpus;

/// エラーモジュール - WordsError, WordsResult を定義
pub mod errors;

/// 選択モジュール - select_word, WordSelector 等の単語抽選機能を提供
pub mod selector;

/// 再エクスポート
pub use constraints::LengthRange;
pub use corpus::WORDS;
pub use errors::{WordsError, WordsResult};
pub use selector::{Selection, WordSelector, select_word, select_word_with};
