//! 仿真报告
//!
//! 把 `SimOutcome` 渲染成可读文本；JSON 输出直接序列化 `SimOutcome`。

mod text;

pub use text::render_text;
