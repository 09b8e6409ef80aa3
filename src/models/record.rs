/// 生成元数据记录类型及其 `XmlRecord` 实现
///
/// 记录由四部分组成：
///
/// * `attrs`  - 字符串属性，字段类型为 `Option<String>`，缺省与空字符串可区分
/// * `one`    - 至多出现一次的子记录，字段类型为 `Option<T>`
/// * `many`   - 可重复的子记录，字段类型为 `Vec<T>`
/// * `texts`  - 只含文本的子元素列表，字段类型为 `Vec<String>`
///
/// 写出时依次输出已知属性、未知属性、`one`、`many`、`texts`、未知子元素。
macro_rules! xml_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident = $tag:literal {
            attrs { $($attr:ident : $attr_tag:literal),* $(,)? }
            one { $($one:ident : $one_ty:ty),* $(,)? }
            many { $($many:ident : $many_ty:ty),* $(,)? }
            texts { $($list:ident : $list_tag:literal),* $(,)? }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $(pub $attr: Option<String>,)*
            $(pub $one: Option<$one_ty>,)*
            $(pub $many: Vec<$many_ty>,)*
            $(pub $list: Vec<String>,)*
            #[serde(default, skip_serializing_if = "crate::models::Extra::is_empty")]
            pub extra: crate::models::Extra,
        }

        impl crate::models::XmlRecord for $name {
            const TAG: &'static str = $tag;

            fn from_node(node: &crate::models::Node) -> crate::error::FdxResult<Self> {
                let mut record = Self::default();
                for (key, value) in &node.attributes {
                    match key.as_str() {
                        $($attr_tag => record.$attr = Some(value.clone()),)*
                        _ => record.extra.attributes.push((key.clone(), value.clone())),
                    }
                }
                for child in &node.children {
                    #[allow(unused_variables)]
                    let tag = child.name.as_str();
                    $(
                        if tag == <$one_ty as crate::models::XmlRecord>::TAG && record.$one.is_none() {
                            record.$one = Some(<$one_ty as crate::models::XmlRecord>::from_node(child)?);
                            continue;
                        }
                    )*
                    $(
                        if tag == <$many_ty as crate::models::XmlRecord>::TAG {
                            record.$many.push(<$many_ty as crate::models::XmlRecord>::from_node(child)?);
                            continue;
                        }
                    )*
                    $(
                        if tag == $list_tag {
                            record.$list.push(child.text.clone().unwrap_or_default());
                            continue;
                        }
                    )*
                    record.extra.children.push(child.clone());
                }
                Ok(record)
            }

            fn to_node(&self) -> crate::models::Node {
                let mut node = crate::models::Node::new($tag);
                $(node.push_attr($attr_tag, self.$attr.as_deref());)*
                $(
                    if let Some(child) = &self.$one {
                        node.children.push(crate::models::XmlRecord::to_node(child));
                    }
                )*
                $(
                    for child in &self.$many {
                        node.children.push(crate::models::XmlRecord::to_node(child));
                    }
                )*
                $(
                    for text in &self.$list {
                        node.children.push(crate::models::Node::text_node($list_tag, text));
                    }
                )*
                self.extra.apply_to(&mut node);
                node
            }
        }
    };
}
