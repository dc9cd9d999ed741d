use crate::models::Dependency;

/// The project's bundled third-party components, in declaration order.
///
/// Compiled in; reports iterate this order. Names are unique.
pub fn dependencies() -> Vec<Dependency> {
    vec![
        Dependency {
            name: "wxWidgets".to_string(),
            version: "3.2.0".to_string(),
            license: "wxWindows".to_string(),
            usage: "dynamic linking".to_string(),
        },
        Dependency {
            name: "yaml-cpp".to_string(),
            version: "0.7.0".to_string(),
            license: "MIT".to_string(),
            usage: "dynamic linking".to_string(),
        },
        Dependency {
            name: "googletest".to_string(),
            version: "1.12.0".to_string(),
            license: "BSD-3-Clause".to_string(),
            usage: "static linking, testing only".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_names_are_unique() {
        let deps = dependencies();
        let mut names: Vec<&str> = deps.iter().map(|d| d.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), deps.len());
    }
}
