//! Built-in poet records, in display order.
//!
//! Some dates are approximate; see the descriptions of 陆龟蒙 and 皮日休.

use super::Era;

pub(super) struct PoetRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub start: i32,
    pub end: i32,
    pub era: Era,
}

const fn poet(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    start: i32,
    end: i32,
    era: Era,
) -> PoetRecord {
    PoetRecord {
        id,
        name,
        description,
        start,
        end,
        era,
    }
}

pub(super) const BUILTIN_POETS: [PoetRecord; 33] = [
    poet("1", "卢照邻", "初唐四杰之一", 635, 689, Era::Early),
    poet("2", "骆宾王", "初唐四杰，《咏鹅》", 640, 684, Era::Early),
    poet("3", "王勃", "初唐四杰，《滕王阁序》", 650, 676, Era::Early),
    poet("4", "杨炯", "初唐四杰之一，辞采俊逸", 650, 693, Era::Early),
    poet("5", "贺知章", "诗风清新通俗，《咏柳》", 659, 744, Era::Early),
    poet("6", "张若虚", "《春江花月夜》\"孤篇横绝\"", 660, 720, Era::Early),
    poet("7", "陈子昂", "倡导古风，反对绮靡文风", 661, 702, Era::Early),
    poet("8", "张九龄", "政治家、名相，诗文俱佳", 678, 740, Era::High),
    poet("9", "王之涣", "边塞诗人，《登鹳雀楼》", 688, 742, Era::High),
    poet("10", "孟浩然", "山水田园派代表", 689, 740, Era::High),
    poet("11", "王昌龄", "\"七绝圣手\"，边塞诗与宫怨诗", 698, 756, Era::High),
    poet("12", "王维", "诗画合一，\"诗佛\"，山水田园诗人", 701, 761, Era::High),
    poet("13", "李白", "\"诗仙\"，浪漫主义高峰", 701, 762, Era::High),
    poet("14", "高适", "边塞诗派代表", 704, 765, Era::High),
    poet("15", "杜甫", "\"诗圣\"，现实主义高峰", 712, 770, Era::High),
    poet("16", "岑参", "边塞诗豪放奇峭", 715, 770, Era::High),
    poet("17", "韦应物", "山水田园诗人，《滁州西涧》", 737, 792, Era::Middle),
    poet("18", "李益", "边塞诗人，七绝名家，《江南曲》", 748, 829, Era::Middle),
    poet("19", "孟郊", "\"郊寒岛瘦\"，代表作《游子吟》", 751, 814, Era::Middle),
    poet("20", "韩愈", "古文运动领袖，\"文起八代之衰\"", 768, 824, Era::Middle),
    poet("21", "白居易", "\"诗魔\"，新乐府运动领袖", 772, 846, Era::Middle),
    poet("22", "刘禹锡", "\"诗豪\"，诗文并茂", 772, 842, Era::Middle),
    poet("23", "李绅", "新乐府运动参与者，《悯农二首》", 772, 846, Era::Middle),
    poet("24", "柳宗元", "山水游记与诗歌皆精", 773, 819, Era::Middle),
    poet("25", "元稹", "与白居易并称\"元白\"，新乐府运动倡导者", 779, 831, Era::Middle),
    poet("26", "贾岛", "\"推敲\"典故来源，\"郊寒岛瘦\"", 779, 843, Era::Middle),
    poet("27", "李贺", "\"诗鬼\"，中唐浪漫主义代表", 790, 816, Era::Middle),
    poet("28", "杜牧", "与李商隐并称\"小李杜\"，七绝成就高", 803, 852, Era::Late),
    poet("29", "温庭筠", "花间派鼻祖，诗词兼工", 812, 866, Era::Late),
    poet("30", "李商隐", "晚唐大家，\"小李杜\"，咏史诗精深婉丽", 813, 858, Era::Late),
    poet("31", "罗隐", "晚唐至五代之交诗人", 833, 909, Era::Late),
    poet("32", "陆龟蒙", "与皮日休并称\"皮陆\"，隐逸诗人", 845, 881, Era::Late),
    poet("33", "皮日休", "与陆龟蒙并称\"皮陆\"，现实主义诗人", 834, 883, Era::Late),
];
