//! Fixture documents and maps shared by unit and integration tests.

use super::label::EvidenceLabel;
use super::map::EvidenceMap;

/// Description listing all four items as plain bullets with ASCII colons.
pub const BULLET_DOCUMENT: &str = "- 申请前截图（页面）: http://a\n\
- 审核弹窗截图: http://b\n\
- Playwright Trace 压缩包: http://c\n\
- Trace Report HTML: http://d";

/// Description holding a four-row item/link table between prose lines.
pub const TABLE_DOCUMENT: &str = "## 验证证据\n\
intro\n\
| 项目 | 链接 |\n\
| --- | --- |\n\
| 申请前截图（页面） | http://a |\n\
| 审核弹窗截图 | http://b |\n\
| Playwright Trace 压缩包 | http://c |\n\
| Trace Report HTML | http://d |\n\
outro";

/// Evidence map holding `http://a` through `http://d` in label order.
#[must_use]
pub fn complete_evidence() -> EvidenceMap {
    EvidenceLabel::ALL
        .into_iter()
        .zip(["http://a", "http://b", "http://c", "http://d"])
        .map(|(label, url)| (label, url.to_owned()))
        .collect()
}
