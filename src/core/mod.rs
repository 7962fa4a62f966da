// Core Domain
// カラム型のディスパッチ、数値幅の解決、配列リテラルのコーデックなど純粋なビジネスロジック

pub mod array_codec;
pub mod column;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod field;
pub mod naming;
pub mod numeric;
pub mod serial;
