//! usecase 層の結合テスト（ポートはすべてスタブで差し替える）
