// src/codegen/loadflow.rs

use crate::cases::TestCaseSet;

use super::{CATALOG, TEST_LOADFLOW};

/// Render the load-flow-test class: a `LoadFlowTester` built once in
/// `@BeforeClass`, one `@Test` per date-hour case.
pub fn render(package: &str, cases: &TestCaseSet) -> String {
    let class = cases.class_prefix();
    let method = cases.method_prefix();

    let mut out = String::new();
    out.push_str(&format!("package {};\n", package));
    out.push('\n');
    out.push_str("import org.junit.BeforeClass;\n");
    out.push_str("import org.junit.Test;\n");
    out.push('\n');
    out.push_str("import com.powsybl.cgmes.CgmesModelException;\n");
    out.push_str("import com.powsybl.cgmes.conversion.test.LoadFlowTester;\n");
    out.push_str("import com.powsybl.cgmes.conversion.test.LoadFlowValidation;\n");
    out.push_str("import com.powsybl.triplestore.TripleStoreFactory;\n");
    out.push('\n');
    out.push_str(&format!("public class {}{} {{\n", class, TEST_LOADFLOW));
    out.push_str("    @BeforeClass\n");
    out.push_str("    public static void setUp() {\n");
    out.push_str(&format!("        catalog = new {}{}();\n", class, CATALOG));
    out.push_str("        tester = new LoadFlowTester(\n");
    out.push_str("                TripleStoreFactory.onlyDefaultImplementation(),\n");
    out.push_str("                new LoadFlowValidation.Builder()\n");
    out.push_str("                        .writeNetworksInputsResults(true)\n");
    out.push_str("                        .validateInitialState(true)\n");
    out.push_str("                        .compareWithInitialState(true)\n");
    out.push_str("                        .build());\n");
    out.push_str("    }\n");
    for dh in &cases.date_hours {
        out.push_str("    @Test\n");
        out.push_str(&format!("    public void {}{}()  {{\n", method, dh));
        out.push_str(&format!(
            "        tester.testLoadFlow(catalog.{}{}());\n",
            method, dh
        ));
        out.push_str("    }\n");
    }
    out.push_str(&format!("    private static {}{} catalog;\n", class, CATALOG));
    out.push_str("    private static LoadFlowTester tester;\n");
    out.push_str("}\n");
    out
}
