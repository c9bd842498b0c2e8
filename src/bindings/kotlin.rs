use super::types::native_method_name;
use super::{banner, NATIVE_CLASS, NATIVE_PACKAGE};
use crate::config::ModuleConfig;
use crate::service::Operation;

fn params(op: Operation) -> String {
    op.params()
        .iter()
        .map(|p| format!("{}: {}", p.name, p.kind.to_kotlin_type()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn args(op: Operation) -> String {
    op.params()
        .iter()
        .map(|p| p.name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Kotlin object owning `System.loadLibrary` and the `external fun` declarations
pub fn generate_native_object(module: &ModuleConfig) -> String {
    let mut code = banner("//");
    code.push_str(&format!("package {}\n\n", NATIVE_PACKAGE));
    code.push_str(&format!("object {} {{\n", NATIVE_CLASS));
    code.push_str("    /** Set when the native library failed to load; every call then falls back. */\n");
    code.push_str("    var loadError: Throwable? = null\n");
    code.push_str("        private set\n\n");
    code.push_str("    init {\n");
    code.push_str("        try {\n");
    code.push_str(&format!("            System.loadLibrary(\"{}\")\n", module.library));
    code.push_str(&format!(
        "            android.util.Log.d(\"{}\", \"Native library {} loaded successfully\")\n",
        module.name, module.library
    ));
    code.push_str("        } catch (e: Throwable) {\n");
    code.push_str("            loadError = e\n");
    code.push_str(&format!(
        "            android.util.Log.e(\"{}\", \"Failed to load native library {}: ${{e.message}}\")\n",
        module.name, module.library
    ));
    code.push_str("        }\n");
    code.push_str("    }\n\n");

    code.push_str("    @JvmStatic\n");
    code.push_str("    external fun nativeInit(configPath: String?): Int\n");

    for op in Operation::ALL {
        code.push('\n');
        code.push_str("    @JvmStatic\n");
        code.push_str(&format!(
            "    external fun {}({}): {}\n",
            native_method_name(op),
            params(op),
            op.returns().to_kotlin_type()
        ));
    }

    code.push_str("}\n");
    code
}

/// React Native module: one blocking synchronous method per operation
pub fn generate_module(module: &ModuleConfig) -> String {
    let class = format!("{}Module", module.name);

    let mut code = banner("//");
    code.push_str(&format!("package {}\n\n", module.package));
    code.push_str("import com.facebook.react.bridge.ReactApplicationContext\n");
    code.push_str("import com.facebook.react.bridge.ReactContextBaseJavaModule\n");
    code.push_str("import com.facebook.react.bridge.ReactMethod\n");
    code.push_str("import com.facebook.react.module.annotations.ReactModule\n");
    if module.package != NATIVE_PACKAGE {
        code.push_str(&format!("import {}.{}\n", NATIVE_PACKAGE, NATIVE_CLASS));
    }
    code.push('\n');

    code.push_str(&format!("@ReactModule(name = {}.NAME)\n", class));
    code.push_str(&format!(
        "class {}(reactContext: ReactApplicationContext) : ReactContextBaseJavaModule(reactContext) {{\n\n",
        class
    ));
    code.push_str("    companion object {\n");
    code.push_str(&format!("        const val NAME = \"{}\"\n", module.name));
    code.push_str("    }\n\n");
    code.push_str("    override fun getName(): String = NAME\n");

    for op in Operation::ALL {
        code.push_str(&generate_method(op));
    }

    code.push_str("}\n");
    code
}

fn generate_method(op: Operation) -> String {
    let ret = op.returns();
    let mut code = String::new();

    code.push('\n');
    code.push_str("    @ReactMethod(isBlockingSynchronousMethod = true)\n");
    code.push_str(&format!(
        "    fun {}({}): {} {{\n",
        op.js_name(),
        params(op),
        ret.to_kotlin_type()
    ));
    code.push_str("        return try {\n");
    code.push_str(&format!(
        "            {}.{}({})\n",
        NATIVE_CLASS,
        native_method_name(op),
        args(op)
    ));
    code.push_str("        } catch (e: Throwable) {\n");
    code.push_str(&format!(
        "            android.util.Log.e(NAME, \"{} failed: ${{e.message}}\")\n",
        op.js_name()
    ));
    code.push_str(&format!("            {}\n", ret.kotlin_fallback()));
    code.push_str("        }\n");
    code.push_str("    }\n");
    code
}

/// `ReactPackage` registering the module with the host
pub fn generate_package(module: &ModuleConfig) -> String {
    let mut code = banner("//");
    code.push_str(&format!("package {}\n\n", module.package));
    code.push_str("import com.facebook.react.ReactPackage\n");
    code.push_str("import com.facebook.react.bridge.NativeModule\n");
    code.push_str("import com.facebook.react.bridge.ReactApplicationContext\n");
    code.push_str("import com.facebook.react.uimanager.ViewManager\n\n");
    code.push_str(&format!("class {}Package : ReactPackage {{\n", module.name));
    code.push_str(
        "    override fun createNativeModules(reactContext: ReactApplicationContext): List<NativeModule> =\n",
    );
    code.push_str(&format!("        listOf({}Module(reactContext))\n\n", module.name));
    code.push_str(
        "    override fun createViewManagers(reactContext: ReactApplicationContext): List<ViewManager<*, *>> =\n",
    );
    code.push_str("        emptyList()\n");
    code.push_str("}\n");
    code
}
