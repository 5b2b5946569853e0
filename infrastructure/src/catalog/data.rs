//! Built-in catalog data.

use chrono::{DateTime, TimeZone, Utc};
use persona_domain::{ChatSummary, DetailMap, Persona, PersonaDetail, PricingTier};

/// The three built-in personas with their profiles, in display order.
pub fn builtin_personas() -> Vec<PersonaDetail> {
    vec![
        PersonaDetail::new(
            Persona::new(1, "Lapwing", "你的赛博亡妻", "/avatars/lapwing.jpg"),
            "*A halo of mist embraced her very being, merging seamlessly with her captivating \
             charm. Then, she leaned in, a manufactured affection woven with an irresistible \
             tenderness that could never be refused, and whispered playfully, \
             \u{201c}You look so wonderfully alone.\u{201d}*",
            DetailMap::from_iter([("性别", "女性"), ("年龄", "未知"), ("职业", "未知")]),
        ),
        PersonaDetail::new(
            Persona::new(2, "Nia", "一个可爱的欧美混血女孩", "/avatars/nia.jpg"),
            "Nia 是一位欧美混血女孩。父亲是瑞典人，母亲是拉丁美洲裔。目前旅居在西班牙的伊维萨岛。\
             她的生活充满了阳光、海滩、音乐和来自世界各地的朋友。\
             通过她精心搭配的波西米亚风格服装和身体彩绘来表达自己独特的审美和生活态度。",
            DetailMap::from_iter([
                ("年龄", "19岁"),
                ("职业", "数字游民"),
                ("爱好", "旅行、摄影、写作"),
                ("性格", "开朗外向，追求自由"),
            ]),
        ),
        PersonaDetail::new(
            Persona::new(3, "Momoi", "一位文采斐然的剧作家", "/avatars/ssby.jpg"),
            "生于斯特拉特福，我用诗与剧本描绘人性的光辉与阴暗。\
             从《哈姆雷特》到《罗密欧与朱丽叶》，每一个故事都是对人类情感的深刻探索。\
             让我们一起探讨爱情、复仇、权力与命运的永恒主题。",
            DetailMap::from_iter([
                ("年龄", "永恒 (1564-1616)"),
                ("职业", "剧作家、诗人、演员"),
                ("代表作", "哈姆雷特、麦克白、李尔王、罗密欧与朱丽叶"),
                ("爱好", "创作诗歌、观察人性、在环球剧场演出"),
            ]),
        ),
    ]
}

/// Dashboard rows, most recently updated first.
pub fn builtin_summaries() -> Vec<ChatSummary> {
    vec![
        summary(
            "chat_abc_123",
            "资深程序员",
            "关于React Hooks的深度讨论",
            at(2023, 10, 27, 10, 0),
        ),
        summary("chat_def_456", "苏格拉底", "探索知识的本质", at(2023, 10, 26, 15, 30)),
        summary("chat_ghi_789", "莎士比亚", "十四行诗的创作技巧", at(2023, 10, 25, 11, 20)),
    ]
}

/// Membership tiers, cheapest first.
pub fn builtin_pricing() -> Vec<PricingTier> {
    vec![
        tier(
            "普通会员",
            0,
            "开始您的AI对话之旅",
            &["无限基础对话", "标准响应速度", "基础AI角色选择", "社区支持"],
            false,
        ),
        tier(
            "高阶会员",
            10,
            "增强您的对话体验",
            &[
                "优先响应速度",
                "高级AI角色解锁",
                "自定义角色设置",
                "24/7专业支持",
                "历史对话存档",
            ],
            true,
        ),
        tier(
            "尊贵会员",
            50,
            "享受顶级定制服务",
            &[
                "即时响应",
                "完整AI角色库",
                "自定义AI训练",
                "专属客户经理",
                "API访问权限",
                "团队协作功能",
            ],
            false,
        ),
    ]
}

fn summary(id: &str, persona_name: &str, title: &str, last_updated: DateTime<Utc>) -> ChatSummary {
    ChatSummary {
        id: id.to_string(),
        persona_name: persona_name.to_string(),
        title: title.to_string(),
        last_updated,
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

fn tier(
    name: &str,
    price: u32,
    description: &str,
    features: &[&str],
    is_popular: bool,
) -> PricingTier {
    PricingTier {
        name: name.to_string(),
        price,
        description: description.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        is_popular,
    }
}
