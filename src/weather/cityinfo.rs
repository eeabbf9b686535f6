//! 城市区域编码表
//!
//! weather.com.cn 按区域编码（AREAID）提供数据，这里收录
//! 各省省会和常用地级市，按 省份/城市 两级索引

/// (省份, 城市, 区域编码)
const AREA_IDS: &[(&str, &str, &str)] = &[
    ("北京", "北京", "101010100"),
    ("上海", "上海", "101020100"),
    ("天津", "天津", "101030100"),
    ("重庆", "重庆", "101040100"),
    ("黑龙江", "哈尔滨", "101050101"),
    ("吉林", "长春", "101060101"),
    ("辽宁", "沈阳", "101070101"),
    ("辽宁", "大连", "101070201"),
    ("内蒙古", "呼和浩特", "101080101"),
    ("河北", "石家庄", "101090101"),
    ("山西", "太原", "101100101"),
    ("陕西", "西安", "101110101"),
    ("山东", "济南", "101120101"),
    ("山东", "青岛", "101120201"),
    ("新疆", "乌鲁木齐", "101130101"),
    ("西藏", "拉萨", "101140101"),
    ("青海", "西宁", "101150101"),
    ("甘肃", "兰州", "101160101"),
    ("宁夏", "银川", "101170101"),
    ("河南", "郑州", "101180101"),
    ("江苏", "南京", "101190101"),
    ("江苏", "无锡", "101190201"),
    ("江苏", "苏州", "101190401"),
    ("湖北", "武汉", "101200101"),
    ("浙江", "杭州", "101210101"),
    ("浙江", "宁波", "101210401"),
    ("安徽", "合肥", "101220101"),
    ("福建", "福州", "101230101"),
    ("福建", "厦门", "101230201"),
    ("江西", "南昌", "101240101"),
    ("湖南", "长沙", "101250101"),
    ("贵州", "贵阳", "101260101"),
    ("四川", "成都", "101270101"),
    ("广东", "广州", "101280101"),
    ("广东", "珠海", "101280701"),
    ("广东", "深圳", "101280601"),
    ("广东", "东莞", "101281601"),
    ("云南", "昆明", "101290101"),
    ("广西", "南宁", "101300101"),
    ("广西", "桂林", "101300501"),
    ("海南", "海口", "101310101"),
    ("海南", "三亚", "101310201"),
    ("香港", "香港", "101320101"),
    ("澳门", "澳门", "101330101"),
    ("台湾", "台北", "101340101"),
];

/// 查询城市对应的区域编码
pub fn area_id(province: &str, city: &str) -> Option<&'static str> {
    AREA_IDS
        .iter()
        .find(|(p, c, _)| *p == province && *c == city)
        .map(|(_, _, id)| *id)
}
