// src/codegen/catalog.rs

use crate::cases::TestCaseSet;

use super::CATALOG;

/// Render the catalog class: one `TestGridModel` accessor per date-hour
/// case, resolving against a data-path constant named after the TSO.
pub fn render(package: &str, base: &str, cases: &TestCaseSet) -> String {
    let class = cases.class_prefix();
    let method = cases.method_prefix();
    let path_const = cases.path_const();

    let mut out = String::new();
    out.push_str(&format!("package {};\n", package));
    out.push('\n');
    out.push_str("import java.nio.file.Path;\n");
    out.push_str("import java.nio.file.Paths;\n");
    out.push('\n');
    out.push_str("import com.powsybl.cgmes.test.TestGridModel;\n");
    out.push_str("import com.powsybl.cgmes.triplestore.CgmesModelTripleStore;\n");
    out.push('\n');
    out.push_str(&format!("public class {}{} {{\n", class, CATALOG));
    for dh in &cases.date_hours {
        out.push_str(&format!(
            "    public TestGridModel {}{}() {{\n",
            method, dh
        ));
        out.push_str(&format!(
            "        return new TestGridModel({}.resolve(\"{}\"), null, CgmesModelTripleStore.CIM_NAMESPACE_16, null, false, false);\n",
            path_const, dh
        ));
        out.push_str("    }\n");
    }
    out.push_str(&format!(
        "    private static final Path {} = Paths.get(\"{}/{}\");\n",
        path_const, base, cases.tso
    ));
    out.push_str("}\n");
    out
}
